use std::error::Error;

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};
use reqwest::{Client, Url};

use crate::schedule_sync::{
    errors::FetchError,
    models::{
        pair_model::{PairsResponse, ScheduleData},
        teacher_model::{DirectoryResponse, Teacher},
        Args, Config,
    },
};

pub fn log_all_teachers(teachers: &[Teacher]) -> () {
    for (index, teacher) in teachers.iter().enumerate() {
        debug!("{}. {} ({})", index, teacher.full_name, teacher.id);
    }
}

pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("TS_"))
        .extract()?;
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    Ok(config)
}

/// Bounds of the directory range query covering every last name that starts with `query`.
pub fn last_name_range(query: &str, sentinel: &str) -> (String, String) {
    (query.to_owned(), format!("{}{}", query, sentinel))
}

/// Query string of a directory lookup. The store wants every value JSON-quoted.
pub fn directory_query(
    start_at: &str,
    end_at: &str,
) -> Result<Vec<(&'static str, String)>, FetchError> {
    Ok(vec![
        ("orderBy", serde_json::to_string("lastName")?),
        ("startAt", serde_json::to_string(start_at)?),
        ("endAt", serde_json::to_string(end_at)?),
    ])
}

pub fn teacher_schedule_url(schedule_base_url: &str, teacher_id: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(schedule_base_url)
        .map_err(|err| FetchError::InvalidUrl(format!("{}: {}", schedule_base_url, err)))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(schedule_base_url.to_owned()))?
        .pop_if_empty()
        .extend(["api", "v1", "schedules", "teacher", teacher_id]);
    Ok(url)
}

pub async fn get_teachers_by_last_name(
    http_client: &Client,
    directory_url: &str,
    start_at: &str,
    end_at: &str,
) -> Result<DirectoryResponse, FetchError> {
    info!("Looking up teachers from {:?} to {:?}", start_at, end_at);
    let response = http_client
        .get(directory_url)
        .query(&directory_query(start_at, end_at)?)
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn get_teacher_schedule_by_id(
    http_client: &Client,
    schedule_base_url: &str,
    teacher_id: &str,
) -> Result<ScheduleData, FetchError> {
    info!("Getting schedule for teacher {}", teacher_id);
    let request_url = teacher_schedule_url(schedule_base_url, teacher_id)?;
    let response = http_client
        .get(request_url)
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    let pairs: PairsResponse = serde_json::from_str(&body)?;
    Ok(pairs.data)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
