pub mod sqlite_settings_repo;
pub mod postgres_settings_repo;
