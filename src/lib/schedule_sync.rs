//! Client-side state for looking up a teacher by last name and loading their schedule.
pub mod errors;
pub mod helpers;
pub mod models;
pub mod run_tool;
pub mod schedule_getter;
pub mod state;
