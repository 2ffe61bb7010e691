use serde::{Deserialize, Serialize};
use std::fmt;

/// Quiz questions are numbered, inline checks usually carry a slug.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u32),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "#{n}"),
            QuestionId::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<u32> for QuestionId {
    fn from(n: u32) -> Self {
        QuestionId::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_owned())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctIndex", alias = "correctAnswer")]
    pub correct_index: usize,
    pub explanation: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl Question {
    /// Whether `selected` is the right option. Depends on nothing but the two indices.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        heading: Option<String>,
        body: String,
    },
    Check {
        question: Question,
    },
    Panel {
        name: String,
        title: String,
        body: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizSpec {
    #[serde(default)]
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub module: usize,
    pub number: usize,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    pub quiz: QuizSpec,
}

impl Section {
    /// Inline checks in the order they appear on the page.
    pub fn checks(&self) -> impl Iterator<Item = &Question> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Check { question } => Some(question),
            _ => None,
        })
    }

    pub fn panel_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Panel { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionBank {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Section,
    MockExam,
}
