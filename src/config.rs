use std::path::PathBuf;

pub const CONTENT_VAR: &str = "COURSE_QUIZ_CONTENT";
pub const EXAM_SIZE_VAR: &str = "COURSE_QUIZ_EXAM_SIZE";
pub const PASS_MARK_VAR: &str = "COURSE_QUIZ_PASS_MARK";
pub const DEFAULT_EXAM_SIZE: usize = 10;
pub const DEFAULT_PASS_MARK: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    /// Course file to load instead of the embedded one.
    pub content_path: Option<PathBuf>,
    pub mock_exam_size: usize,
    /// Percentage a mock exam needs to pass.
    pub pass_mark: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Course Quiz".to_owned(),
            content_path: None,
            mock_exam_size: DEFAULT_EXAM_SIZE,
            pass_mark: DEFAULT_PASS_MARK,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.content_path = lookup(CONTENT_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup(EXAM_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.mock_exam_size = n,
                _ => log::warn!(
                    "ignoring {EXAM_SIZE_VAR}={raw:?}, using {}",
                    DEFAULT_EXAM_SIZE
                ),
            }
        }

        if let Some(raw) = lookup(PASS_MARK_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n <= 100 => config.pass_mark = n,
                _ => log::warn!(
                    "ignoring {PASS_MARK_VAR}={raw:?}, using {}",
                    DEFAULT_PASS_MARK
                ),
            }
        }

        config
    }
}
