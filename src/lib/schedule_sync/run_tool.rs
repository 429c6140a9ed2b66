use log::{info, warn};

use super::{
    errors::SyncError,
    helpers::log_all_teachers,
    models::{pair_model::Pair, Args, Config, SyncOptions},
    schedule_getter::{ScheduleGetter, TeacherDirectory},
    state::ScheduleSyncState,
};

/// Searches for `args.last_name`, selects the `args.pick`-th teacher found and returns
/// their schedule.
pub async fn run<TD: TeacherDirectory, SG: ScheduleGetter>(
    directory: TD,
    schedule_getter: SG,
    args: &Args,
    config: &Config,
) -> Result<Vec<Pair>, SyncError> {
    let state = ScheduleSyncState::new(directory, schedule_getter, SyncOptions::from(config));
    let teachers = state.teachers();
    let pairs = state.pairs();

    state.search(&args.last_name).await?;
    let found = teachers.borrow().clone();
    log_all_teachers(&found);

    let Some(teacher) = found.get(args.pick).cloned() else {
        warn!(
            "No teacher #{} among {} found for {:?}",
            args.pick,
            found.len(),
            args.last_name
        );
        return Ok(Vec::new());
    };
    info!("Selected {}", teacher.full_name);

    state.select_teacher(Some(teacher)).await?;
    let schedule = pairs.borrow().clone();
    Ok(schedule)
}
