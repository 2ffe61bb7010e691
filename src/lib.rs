pub mod app;
pub mod bank;
pub mod check;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod panels;
pub mod quiz;
pub mod ui;
pub mod validate;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::CourseApp;

use config::AppConfig;
use error::ContentError;

/// Loads the course (from `config.content_path` when set) and the question bank.
pub fn load_app(config: AppConfig) -> Result<CourseApp, ContentError> {
    let course = match &config.content_path {
        Some(path) => {
            log::info!("loading course from {}", path.display());
            data::read_course_from_path(path)?
        }
        None => data::read_course_embedded()?,
    };
    let bank = data::read_bank_embedded()?;
    Ok(CourseApp::new(course, bank, config))
}
