pub mod settings_model;
pub mod settings_repository;
pub mod settings_service;


pub use settings_model::*;
pub use settings_repository::SettingsRepositoryTrait;
pub use settings_service::{SettingsService, SettingsServiceTrait};
