use std::error::Error;

use bmstu_teacher_schedule::schedule_sync::{
    helpers::get_config, models::Args, run_tool::run, schedule_getter::TimetableBackend,
};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    let backend = TimetableBackend::new(reqwest::Client::new(), &config);

    /* Find the teacher and load their pairs */
    let pairs = run(backend.clone(), backend, &args, &config).await?;
    info!("Got {} pair(s)", pairs.len());

    println!("{}", serde_json::to_string_pretty(&pairs)?);
    Ok(())
}
