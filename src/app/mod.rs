use crate::check::InlineCheck;
use crate::config::AppConfig;
use crate::model::{AppState, Course, QuestionBank, QuestionId, Section};
use crate::panels::{Accordion, PanelState};
use crate::quiz::QuizSession;
use egui_commonmark::CommonMarkCache;

pub mod actions;
pub mod navigation;
pub mod queries;

pub use crate::view_models::{OptionView, SectionInfo};

/// Everything the learner has done on the section page currently open.
/// Built on entry, dropped on leaving.
#[derive(Debug, Clone)]
pub struct SectionSession {
    pub checks: Vec<InlineCheck>,
    pub panels: PanelState,
    pub faqs: Accordion,
    /// `None` until the learner starts the end-of-section quiz.
    pub quiz: Option<QuizSession>,
}

impl SectionSession {
    pub fn new(section: &Section) -> Self {
        Self {
            checks: section.checks().cloned().map(InlineCheck::new).collect(),
            panels: PanelState::new(),
            faqs: Accordion::default(),
            quiz: None,
        }
    }

    pub fn check(&self, id: &QuestionId) -> Option<&InlineCheck> {
        self.checks.iter().find(|c| &c.question().id == id)
    }

    pub fn check_mut(&mut self, id: &QuestionId) -> Option<&mut InlineCheck> {
        self.checks.iter_mut().find(|c| &c.question().id == id)
    }
}

pub struct CourseApp {
    pub course: Course,
    pub bank: QuestionBank,
    pub config: AppConfig,
    pub state: AppState,
    pub current_section: Option<usize>,
    pub session: Option<SectionSession>,
    pub exam: Option<QuizSession>,
    pub message: String,
    pub cm_cache: CommonMarkCache,
}

impl CourseApp {
    pub fn new(course: Course, bank: QuestionBank, config: AppConfig) -> Self {
        Self {
            course,
            bank,
            config,
            state: AppState::Welcome,
            current_section: None,
            session: None,
            exam: None,
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
        }
    }

    pub fn section(&self) -> Option<&Section> {
        self.current_section.and_then(|i| self.course.sections.get(i))
    }
}
