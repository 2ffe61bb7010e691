use super::*;
use rand::Rng;

impl CourseApp {
    /// Opens a section with a clean slate. Anything answered on the
    /// previous page is discarded.
    pub fn open_section(&mut self, idx: usize) {
        let section = match self.course.sections.get(idx) {
            Some(s) => s,
            None => return,
        };
        if let Some(prev) = self.section() {
            log::debug!("leaving section {}", prev.id);
        }
        log::debug!("entering section {}", section.id);

        self.session = Some(SectionSession::new(section));
        self.current_section = Some(idx);
        self.exam = None;
        self.state = AppState::Section;
        self.message.clear();
    }

    pub fn has_next_section(&self) -> bool {
        self.current_section
            .is_some_and(|i| i + 1 < self.course.sections.len())
    }

    pub fn has_prev_section(&self) -> bool {
        self.current_section.is_some_and(|i| i > 0)
    }

    pub fn next_section(&mut self) {
        if self.has_next_section() {
            if let Some(i) = self.current_section {
                self.open_section(i + 1);
            }
        }
    }

    pub fn prev_section(&mut self) {
        if self.has_prev_section() {
            if let Some(i) = self.current_section {
                self.open_section(i - 1);
            }
        }
    }

    pub fn back_to_index(&mut self) {
        if let Some(section) = self.section() {
            log::debug!("leaving section {}", section.id);
        }
        self.session = None;
        self.current_section = None;
        self.exam = None;
        self.state = AppState::Welcome;
        self.message.clear();
    }

    pub fn start_mock_exam(&mut self) {
        let mut rng = rand::thread_rng();
        self.start_mock_exam_with(&mut rng);
    }

    pub fn start_mock_exam_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session = None;
        self.current_section = None;
        self.exam = Some(self.bank.mock_exam(self.config.mock_exam_size, rng));
        self.state = AppState::MockExam;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn opening_a_section_builds_a_fresh_session() {
        let mut app = app();
        app.open_section(0);
        assert_eq!(app.state, AppState::Section);
        let session = app.session.as_ref().expect("session");
        assert_eq!(session.checks.len(), 3);
        assert!(session.checks.iter().all(|c| !c.is_answered()));
        assert!(session.quiz.is_none());
    }

    #[test]
    fn leaving_a_section_forgets_answers() {
        let mut app = app();
        app.open_section(0);
        let id = QuestionId::from("coshh-stands-for");
        app.answer_check(&id, 1);
        app.toggle_panel("on-site");

        app.next_section();
        app.prev_section();

        let session = app.session.as_ref().expect("session");
        assert!(!session.check(&id).expect("check").is_answered());
        assert!(!session.panels.is_open("on-site"));
    }

    #[test]
    fn prev_and_next_stop_at_the_ends() {
        let mut app = app();
        app.open_section(0);
        assert!(!app.has_prev_section());
        app.prev_section();
        assert_eq!(app.current_section, Some(0));

        let last = app.course.sections.len() - 1;
        app.open_section(last);
        assert!(!app.has_next_section());
        app.next_section();
        assert_eq!(app.current_section, Some(last));
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut app = app();
        app.open_section(99);
        assert_eq!(app.state, AppState::Welcome);
        assert!(app.session.is_none());
    }

    #[test]
    fn back_to_index_drops_the_session() {
        let mut app = app();
        app.open_section(1);
        app.back_to_index();
        assert_eq!(app.state, AppState::Welcome);
        assert!(app.session.is_none());
        assert!(app.current_section.is_none());
    }

    #[test]
    fn mock_exam_uses_configured_size() {
        let mut app = app();
        app.config.mock_exam_size = 5;
        app.start_mock_exam_with(&mut StdRng::seed_from_u64(11));
        assert_eq!(app.state, AppState::MockExam);
        assert_eq!(app.exam.as_ref().map(|e| e.questions().len()), Some(5));
    }
}
