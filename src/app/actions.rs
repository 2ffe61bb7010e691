use super::*;
use crate::quiz::{Score, SelectOutcome};
use crate::view_models::exam_result;

impl CourseApp {
    /// Records the answer to an inline check on the open section.
    pub fn answer_check(&mut self, id: &QuestionId, index: usize) {
        let Some(check) = self.session.as_mut().and_then(|s| s.check_mut(id)) else {
            return;
        };
        if check.select_option(index) {
            log::debug!("check {id} answered with option {index}");
        }
    }

    pub fn toggle_panel(&mut self, name: &str) {
        if let Some(session) = self.session.as_mut() {
            session.panels.toggle(name);
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.faqs.toggle(index);
        }
    }

    /// Shows the end-of-section quiz. Does nothing if it is already running.
    pub fn start_quiz(&mut self) {
        let Some(spec) = self.section().map(|s| s.quiz.clone()) else {
            return;
        };
        if let Some(session) = self.session.as_mut() {
            if session.quiz.is_none() {
                session.quiz = Some(QuizSession::from_spec(&spec));
            }
        }
    }

    pub fn answer_quiz(&mut self, id: &QuestionId, index: usize) {
        let outcome = match self.session.as_mut().and_then(|s| s.quiz.as_mut()) {
            Some(quiz) => quiz.select_answer(id, index),
            None => return,
        };
        if let SelectOutcome::Completed(score) = outcome {
            let title = self
                .session
                .as_ref()
                .and_then(|s| s.quiz.as_ref())
                .and_then(|q| q.title().map(str::to_owned));
            let title = title.as_deref().unwrap_or("Quiz");
            log::info!("{title} completed with score {score} ({}%)", score.percentage());
            self.message = quiz_message(title, score);
        }
    }

    pub fn retake_quiz(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.quiz = session.quiz.take().map(QuizSession::retake);
        }
        self.message.clear();
    }

    pub fn answer_exam(&mut self, id: &QuestionId, index: usize) {
        let outcome = match self.exam.as_mut() {
            Some(exam) => exam.select_answer(id, index),
            None => return,
        };
        if let SelectOutcome::Completed(score) = outcome {
            let title = self
                .exam
                .as_ref()
                .and_then(|e| e.title().map(str::to_owned));
            let title = title.as_deref().unwrap_or("Mock exam");
            let pass_mark = self.config.pass_mark;
            log::info!(
                "{title} completed with score {score} ({}%), passed: {}",
                score.percentage(),
                score.passed(pass_mark)
            );
            self.message = exam_result(title, score, pass_mark);
        }
    }

    pub fn retake_exam(&mut self) {
        self.start_mock_exam();
    }
}

fn quiz_message(title: &str, score: Score) -> String {
    if score.is_perfect() {
        format!("🎉 {title}: all {} correct!", score.total)
    } else {
        format!("✅ {title} complete: {score} correct ({}%)", score.percentage())
    }
}
