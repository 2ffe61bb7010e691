use crate::model::QuestionId;
use std::path::PathBuf;
use thiserror::Error;

/// Defects in authored course content. These are caught when content is loaded
/// and never reach the learner.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthoringError {
    #[error("question {id} in {scope} has {count} options, at least 2 are required")]
    TooFewOptions {
        scope: String,
        id: QuestionId,
        count: usize,
    },
    #[error("question {id} in {scope}: correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange {
        scope: String,
        id: QuestionId,
        index: usize,
        len: usize,
    },
    #[error("duplicate question id {id} in {scope}")]
    DuplicateQuestionId { scope: String, id: QuestionId },
    #[error("quiz in {scope} has no questions")]
    EmptyQuiz { scope: String },
    #[error("duplicate section id {id}")]
    DuplicateSectionId { id: String },
    #[error("duplicate panel name {name} in section {section}")]
    DuplicatePanel { section: String, name: String },
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("could not parse content: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content: {0}")]
    Authoring(#[from] AuthoringError),
}
