use reqwest::Client;

use super::{
    errors::FetchError,
    helpers::{get_teacher_schedule_by_id, get_teachers_by_last_name},
    models::{pair_model::ScheduleData, teacher_model::DirectoryResponse, Config},
};

/// A trait, necessary for every entity that will be used for looking teachers up by last name.
#[allow(async_fn_in_trait)]
pub trait TeacherDirectory {
    /// Records whose last name lies between `start_at` and `end_at`.
    async fn find_teachers(&self, start_at: &str, end_at: &str)
        -> Result<DirectoryResponse, FetchError>;
}

/// A trait, necessary for every entity that will be used for getting a teacher's schedule.
#[allow(async_fn_in_trait)]
pub trait ScheduleGetter {
    async fn get_schedule(&self, teacher_id: &str) -> Result<ScheduleData, FetchError>;
}

/// Talks to the realtime database for the directory and to the backend for schedules.
#[derive(Debug, Clone)]
pub struct TimetableBackend {
    http_client: Client,
    directory_url: String,
    schedule_base_url: String,
}

impl TimetableBackend {
    pub fn new(http_client: Client, config: &Config) -> Self {
        Self {
            http_client,
            directory_url: config.directory_url.to_owned(),
            schedule_base_url: config.schedule_base_url.to_owned(),
        }
    }
}

impl TeacherDirectory for TimetableBackend {
    async fn find_teachers(
        &self,
        start_at: &str,
        end_at: &str,
    ) -> Result<DirectoryResponse, FetchError> {
        get_teachers_by_last_name(&self.http_client, &self.directory_url, start_at, end_at).await
    }
}

impl ScheduleGetter for TimetableBackend {
    async fn get_schedule(&self, teacher_id: &str) -> Result<ScheduleData, FetchError> {
        get_teacher_schedule_by_id(&self.http_client, &self.schedule_base_url, teacher_id).await
    }
}
