pub mod schedule_sync;
