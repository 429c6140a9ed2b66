//! Session state of the schedule lookup: found teachers, the selected one and their pairs.
//!
//! Every published value is a `watch` channel, so a new observer immediately sees the
//! latest value and observers are only woken when a value really changes. Both operations
//! follow a latest-wins rule: a fetch whose trigger has been superseded never publishes.
use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use log::{debug, error, info};
use tokio::{sync::watch, time::timeout};

use super::{
    errors::{FetchError, SyncError},
    helpers::last_name_range,
    models::{
        pair_model::Pair,
        teacher_model::{collect_teachers, Teacher},
        SyncOptions,
    },
    schedule_getter::{ScheduleGetter, TeacherDirectory},
};

pub struct ScheduleSyncState<TD, SG> {
    directory: TD,
    schedule_getter: SG,
    range_sentinel: String,
    request_timeout: Duration,
    teachers: watch::Sender<Vec<Teacher>>,
    selected_teacher: watch::Sender<Option<Teacher>>,
    pairs: watch::Sender<Vec<Pair>>,
    search_generation: AtomicU64,
    selection_generation: AtomicU64,
}

impl<TD: TeacherDirectory, SG: ScheduleGetter> ScheduleSyncState<TD, SG> {
    pub fn new(directory: TD, schedule_getter: SG, options: SyncOptions) -> Self {
        Self {
            directory,
            schedule_getter,
            range_sentinel: options.range_sentinel,
            request_timeout: options.request_timeout,
            teachers: watch::Sender::new(Vec::new()),
            selected_teacher: watch::Sender::new(None),
            pairs: watch::Sender::new(Vec::new()),
            search_generation: AtomicU64::new(0),
            selection_generation: AtomicU64::new(0),
        }
    }

    /// Latest search results, sorted by full name.
    pub fn teachers(&self) -> watch::Receiver<Vec<Teacher>> {
        self.teachers.subscribe()
    }

    pub fn selected_teacher(&self) -> watch::Receiver<Option<Teacher>> {
        self.selected_teacher.subscribe()
    }

    /// Schedule of the selected teacher; empty when nobody is selected or loading failed.
    pub fn pairs(&self) -> watch::Receiver<Vec<Pair>> {
        self.pairs.subscribe()
    }

    /// Looks up teachers whose last name starts with `last_name_query` and publishes them.
    ///
    /// A blank query does nothing. On failure the previous results stay published and the
    /// error is logged and returned.
    pub async fn search(&self, last_name_query: &str) -> Result<(), SyncError> {
        if last_name_query.trim().is_empty() {
            debug!("Skipping teacher search for a blank query");
            return Ok(());
        }

        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (start_at, end_at) = last_name_range(last_name_query, &self.range_sentinel);
        let response = self
            .bounded(self.directory.find_teachers(&start_at, &end_at))
            .await;

        if self.search_generation.load(Ordering::SeqCst) != generation {
            match response {
                Ok(_) => debug!("Dropping results of superseded search {:?}", last_name_query),
                Err(err) => debug!(
                    "Ignoring failure of a superseded search {:?}: {}",
                    last_name_query, err
                ),
            }
            return Ok(());
        }

        let teachers = match response {
            Ok(response) => collect_teachers(response),
            Err(source) => {
                let err = SyncError::Search {
                    query: last_name_query.to_owned(),
                    source,
                };
                error!("{}", err);
                return Err(err);
            }
        };
        info!(
            "Found {} teacher(s) for {:?}",
            teachers.len(),
            last_name_query
        );

        self.teachers.send_if_modified(|current| {
            if *current == teachers {
                return false;
            }
            *current = teachers;
            true
        });
        Ok(())
    }

    /// Selects `teacher` (or nobody) and loads the matching schedule.
    ///
    /// Selecting the teacher that is already selected (same id) is a no-op. Clearing the
    /// selection empties the pairs without any request. If another selection is made while
    /// the schedule is still loading, the load is dropped and nothing is published.
    pub async fn select_teacher(&self, teacher: Option<Teacher>) -> Result<(), SyncError> {
        let mut generation = 0;
        let changed = self.selected_teacher.send_if_modified(|current| {
            if current.as_ref().map(|t| &t.id) == teacher.as_ref().map(|t| &t.id) {
                return false;
            }
            generation = self.selection_generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = teacher.clone();
            true
        });
        if !changed {
            debug!("Teacher selection did not change");
            return Ok(());
        }

        let Some(teacher) = teacher else {
            self.publish_pairs(generation, Vec::new());
            return Ok(());
        };

        let mut selection = self.selected_teacher.subscribe();
        // a load that finishes together with a newer selection still goes through the
        // generation checks below, so its result is never published
        let fetched = tokio::select! {
            biased;
            fetched = self.bounded(self.schedule_getter.get_schedule(&teacher.id)) => fetched,
            _ = selection.changed() => {
                debug!("Selection moved away from {} while loading its schedule", teacher.id);
                return Ok(());
            }
        };

        match fetched {
            Ok(schedule) => {
                debug!(
                    "Schedule {:?} of {:?} for teacher {}",
                    schedule.uuid, schedule.time, teacher.id
                );
                info!(
                    "Loaded {} pair(s) for {}",
                    schedule.schedule.len(),
                    teacher.full_name
                );
                self.publish_pairs(generation, schedule.schedule);
                Ok(())
            }
            Err(source) if self.is_current_selection(generation) => {
                let err = SyncError::Pairs {
                    teacher_id: teacher.id.to_owned(),
                    source,
                };
                error!("{}", err);
                self.publish_pairs(generation, Vec::new());
                Err(err)
            }
            Err(source) => {
                debug!("Ignoring failure of a superseded schedule load: {}", source);
                Ok(())
            }
        }
    }

    fn is_current_selection(&self, generation: u64) -> bool {
        self.selection_generation.load(Ordering::SeqCst) == generation
    }

    fn publish_pairs(&self, generation: u64, pairs: Vec<Pair>) -> bool {
        self.pairs.send_if_modified(|current| {
            if !self.is_current_selection(generation) {
                debug!("Dropping pairs of a superseded selection");
                return false;
            }
            if *current == pairs {
                return false;
            }
            *current = pairs;
            true
        })
    }

    async fn bounded<T>(
        &self,
        fetch: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, FetchError> {
        timeout(self.request_timeout, fetch)
            .await
            .unwrap_or_else(|_| Err(FetchError::Timeout(self.request_timeout)))
    }
}
