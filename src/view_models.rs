// src/view_models.rs

use crate::check::InlineCheck;
use crate::model::QuestionId;
use crate::quiz::{QuestionState, QuizSession, Score};

#[derive(Clone, Debug)]
pub struct SectionInfo {
    pub idx: usize,
    pub module: usize,
    pub number: usize,
    pub title: String,
    pub check_count: usize,
    pub quiz_len: usize,
}

impl SectionInfo {
    pub fn label(&self) -> String {
        format!("{}.{}  {}", self.module, self.number, self.title)
    }

    pub fn detail(&self) -> String {
        let checks = match self.check_count {
            0 => String::new(),
            1 => "1 quick check · ".to_owned(),
            n => format!("{n} quick checks · "),
        };
        format!("{checks}{}-question quiz", self.quiz_len)
    }
}

/// How one answer option is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionView {
    /// Question not answered yet, option is clickable.
    Open,
    ChosenCorrect,
    ChosenWrong,
    /// The right option, shown after a wrong pick.
    RevealedCorrect,
    Inactive,
}

impl OptionView {
    pub fn for_option(option: usize, correct_index: usize, selected: Option<usize>) -> Self {
        match selected {
            None => OptionView::Open,
            Some(s) if s == option && s == correct_index => OptionView::ChosenCorrect,
            Some(s) if s == option => OptionView::ChosenWrong,
            Some(_) if option == correct_index => OptionView::RevealedCorrect,
            Some(_) => OptionView::Inactive,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            OptionView::ChosenCorrect => "✅",
            OptionView::ChosenWrong => "❌",
            OptionView::RevealedCorrect => "✔",
            OptionView::Open | OptionView::Inactive => "",
        }
    }
}

/// What the learner sees under an answered question, taken from the
/// component that recorded the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub selected: usize,
    pub correct: bool,
    pub explanation: &'a str,
}

impl<'a> Feedback<'a> {
    pub fn from_check(check: &'a InlineCheck) -> Option<Self> {
        Some(Self {
            selected: check.selected()?,
            correct: check.is_correct()?,
            explanation: check.explanation()?,
        })
    }

    pub fn from_quiz(quiz: &'a QuizSession, id: &QuestionId) -> Option<Self> {
        match quiz.question_state(id) {
            QuestionState::Answered { selected, correct } => Some(Self {
                selected,
                correct,
                explanation: quiz.explanation(id)?,
            }),
            QuestionState::Unanswered => None,
        }
    }
}

pub fn verdict(correct: bool) -> &'static str {
    if correct { "✅ Correct" } else { "❌ Incorrect" }
}

pub fn progress_line(score: Score, answered: usize) -> String {
    if answered == score.total {
        format!("Score: {score} ({}%)", score.percentage())
    } else {
        format!(
            "Answered {answered} of {} · {} correct so far",
            score.total, score.correct
        )
    }
}

/// Result line for a finished mock exam.
pub fn exam_result(title: &str, score: Score, pass_mark: u32) -> String {
    let percent = score.percentage();
    if score.passed(pass_mark) {
        format!("✅ {title}: {score} correct ({percent}%), passed (pass mark {pass_mark}%)")
    } else {
        format!("❌ {title}: {score} correct ({percent}%), not passed (pass mark {pass_mark}%)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(id: u32) -> Question {
        Question {
            id: QuestionId::Number(id),
            prompt: format!("Question {id}"),
            options: ["A", "B", "C"].map(String::from).to_vec(),
            correct_index: 2,
            explanation: format!("C answers {id}."),
            section: None,
            difficulty: None,
        }
    }

    #[test]
    fn check_feedback_follows_the_recorded_answer() {
        let mut check = InlineCheck::new(question(1));
        assert_eq!(Feedback::from_check(&check), None);
        check.select_option(0);
        check.select_option(2);
        assert_eq!(
            Feedback::from_check(&check),
            Some(Feedback {
                selected: 0,
                correct: false,
                explanation: "C answers 1.",
            })
        );
    }

    #[test]
    fn quiz_feedback_is_per_question() {
        let mut quiz = QuizSession::new(None, vec![question(1), question(2)]);
        quiz.select_answer(&QuestionId::Number(2), 2);
        assert_eq!(Feedback::from_quiz(&quiz, &QuestionId::Number(1)), None);
        assert_eq!(
            Feedback::from_quiz(&quiz, &QuestionId::Number(2)),
            Some(Feedback {
                selected: 2,
                correct: true,
                explanation: "C answers 2.",
            })
        );
    }

    #[test]
    fn exam_result_states_pass_or_fail() {
        let passed = exam_result("Mock", Score { correct: 8, total: 10 }, 80);
        assert_eq!(passed, "✅ Mock: 8/10 correct (80%), passed (pass mark 80%)");
        let failed = exam_result("Mock", Score { correct: 7, total: 10 }, 80);
        assert_eq!(failed, "❌ Mock: 7/10 correct (70%), not passed (pass mark 80%)");
    }

    #[test]
    fn unanswered_options_are_open() {
        for i in 0..4 {
            assert_eq!(OptionView::for_option(i, 3, None), OptionView::Open);
        }
    }

    #[test]
    fn wrong_pick_reveals_the_right_option() {
        let views: Vec<_> = (0..4).map(|i| OptionView::for_option(i, 3, Some(0))).collect();
        assert_eq!(
            views,
            vec![
                OptionView::ChosenWrong,
                OptionView::Inactive,
                OptionView::Inactive,
                OptionView::RevealedCorrect
            ]
        );
    }

    #[test]
    fn right_pick_is_marked_correct() {
        assert_eq!(OptionView::for_option(2, 2, Some(2)), OptionView::ChosenCorrect);
        assert_eq!(OptionView::for_option(1, 2, Some(2)), OptionView::Inactive);
    }

    #[test]
    fn progress_line_switches_to_score_when_done() {
        let partial = Score { correct: 1, total: 3 };
        assert_eq!(progress_line(partial, 2), "Answered 2 of 3 · 1 correct so far");
        let done = Score { correct: 2, total: 3 };
        assert_eq!(progress_line(done, 3), "Score: 2/3 (67%)");
    }

    #[test]
    fn section_label_and_detail() {
        let info = SectionInfo {
            idx: 0,
            module: 1,
            number: 2,
            title: "Types of Hazardous Substances".into(),
            check_count: 3,
            quiz_len: 6,
        };
        assert_eq!(info.label(), "1.2  Types of Hazardous Substances");
        assert_eq!(info.detail(), "3 quick checks · 6-question quiz");
    }
}
