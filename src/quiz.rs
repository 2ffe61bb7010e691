use crate::model::{Question, QuestionId, QuizSpec};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// Rounded to the nearest whole percent.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct * 100 + self.total / 2) / self.total) as u32
    }

    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    /// Whether the rounded percentage reaches `pass_mark` (0 to 100).
    pub fn passed(&self, pass_mark: u32) -> bool {
        self.percentage() >= pass_mark
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered { selected: usize, correct: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded,
    /// This answer was the last one missing. Returned once per session.
    Completed(Score),
    AlreadyAnswered,
    UnknownQuestion,
}

/// One run through an ordered list of questions. Answers only accumulate:
/// nothing in a session ever returns a question to unanswered.
#[derive(Debug, Clone)]
pub struct QuizSession {
    title: Option<String>,
    questions: Vec<Question>,
    answers: HashMap<QuestionId, usize>,
}

impl QuizSession {
    pub fn new(title: Option<String>, questions: Vec<Question>) -> Self {
        Self {
            title,
            questions,
            answers: HashMap::new(),
        }
    }

    pub fn from_spec(spec: &QuizSpec) -> Self {
        Self::new(spec.title.clone(), spec.questions.clone())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn select_answer(&mut self, id: &QuestionId, index: usize) -> SelectOutcome {
        if !self.questions.iter().any(|q| &q.id == id) {
            return SelectOutcome::UnknownQuestion;
        }
        if self.answers.contains_key(id) {
            return SelectOutcome::AlreadyAnswered;
        }
        self.answers.insert(id.clone(), index);
        if self.is_complete() {
            SelectOutcome::Completed(self.score())
        } else {
            SelectOutcome::Recorded
        }
    }

    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|q| self.answers.contains_key(&q.id))
    }

    /// Correct answers among those given so far, out of all questions.
    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id).is_some_and(|&i| q.is_correct(i)))
            .count();
        Score {
            correct,
            total: self.questions.len(),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn question_state(&self, id: &QuestionId) -> QuestionState {
        let question = self.questions.iter().find(|q| &q.id == id);
        match (question, self.answers.get(id)) {
            (Some(q), Some(&selected)) => QuestionState::Answered {
                selected,
                correct: q.is_correct(selected),
            },
            _ => QuestionState::Unanswered,
        }
    }

    /// Explanation of a question, available once it has been answered.
    pub fn explanation(&self, id: &QuestionId) -> Option<&str> {
        if !self.answers.contains_key(id) {
            return None;
        }
        self.questions
            .iter()
            .find(|q| &q.id == id)
            .map(|q| q.explanation.as_str())
    }

    /// A fresh session over the same questions.
    pub fn retake(self) -> Self {
        Self::new(self.title, self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(n: u32) -> QuestionId {
        QuestionId::Number(n)
    }

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id: QuestionId::Number(id),
            prompt: format!("Question {id}"),
            options: ["A", "B", "C", "D"].map(String::from).to_vec(),
            correct_index: correct,
            explanation: format!("Explanation {id}"),
            section: None,
            difficulty: None,
        }
    }

    fn three_question_quiz() -> QuizSession {
        QuizSession::new(
            Some("Section 1 Knowledge Check".into()),
            vec![question(1, 1), question(2, 0), question(3, 2)],
        )
    }

    #[test]
    fn two_of_three_correct() {
        let mut quiz = three_question_quiz();
        assert_eq!(quiz.select_answer(&qid(1), 1), SelectOutcome::Recorded);
        assert_eq!(quiz.select_answer(&qid(2), 1), SelectOutcome::Recorded);
        assert_eq!(
            quiz.select_answer(&qid(3), 2),
            SelectOutcome::Completed(Score { correct: 2, total: 3 })
        );
        assert_eq!(quiz.score(), Score { correct: 2, total: 3 });
        assert_eq!(quiz.score().to_string(), "2/3");
        assert_eq!(quiz.score().percentage(), 67);
    }

    #[test]
    fn single_question_quiz_completes_on_first_answer() {
        let mut quiz = QuizSession::new(None, vec![question(1, 0)]);
        assert!(!quiz.is_complete());
        let outcome = quiz.select_answer(&qid(1), 3);
        assert_eq!(outcome, SelectOutcome::Completed(Score { correct: 0, total: 1 }));
        assert!(quiz.is_complete());
        assert!(quiz.score().correct <= 1);
    }

    #[test]
    fn later_answers_to_same_question_are_ignored() {
        let mut quiz = three_question_quiz();
        quiz.select_answer(&qid(1), 0);
        assert_eq!(quiz.select_answer(&qid(1), 1), SelectOutcome::AlreadyAnswered);
        assert_eq!(
            quiz.question_state(&qid(1)),
            QuestionState::Answered {
                selected: 0,
                correct: false
            }
        );
        assert_eq!(quiz.score().correct, 0);
    }

    #[test]
    fn partial_score_counts_answered_questions_only() {
        let mut quiz = three_question_quiz();
        quiz.select_answer(&qid(2), 0);
        assert_eq!(quiz.score(), Score { correct: 1, total: 3 });
        assert_eq!(quiz.answered_count(), 1);
        assert_eq!(quiz.question_state(&qid(1)), QuestionState::Unanswered);
        assert_eq!(quiz.explanation(&qid(1)), None);
        assert_eq!(quiz.explanation(&qid(2)), Some("Explanation 2"));
    }

    #[test]
    fn score_ignores_question_order() {
        let answers = [(1, 1), (2, 1), (3, 2)];
        let mut forward = three_question_quiz();
        let mut reversed =
            QuizSession::new(None, vec![question(3, 2), question(2, 0), question(1, 1)]);
        for (id, idx) in answers {
            forward.select_answer(&qid(id), idx);
            reversed.select_answer(&qid(id), idx);
        }
        assert_eq!(forward.score(), reversed.score());
    }

    #[test]
    fn completion_is_reported_once_and_sticks() {
        let mut quiz = three_question_quiz();
        quiz.select_answer(&qid(1), 1);
        quiz.select_answer(&qid(2), 0);
        assert!(matches!(quiz.select_answer(&qid(3), 0), SelectOutcome::Completed(_)));
        for (id, idx) in [(1, 0), (2, 2), (3, 3)] {
            assert_eq!(quiz.select_answer(&qid(id), idx), SelectOutcome::AlreadyAnswered);
            assert!(quiz.is_complete());
        }
        assert_eq!(quiz.score().correct, 2);
    }

    #[test]
    fn unknown_question_changes_nothing() {
        let mut quiz = three_question_quiz();
        assert_eq!(quiz.select_answer(&qid(42), 0), SelectOutcome::UnknownQuestion);
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn pass_mark_compares_rounded_percentage() {
        let sixteen_of_twenty = Score { correct: 16, total: 20 };
        assert!(sixteen_of_twenty.passed(80));
        assert!(!sixteen_of_twenty.passed(81));
        assert!(!Score { correct: 15, total: 20 }.passed(80));
        assert!(Score { correct: 0, total: 3 }.passed(0));
    }

    #[test]
    fn retake_starts_empty_with_same_questions() {
        let mut quiz = three_question_quiz();
        for id in 1..=3 {
            quiz.select_answer(&qid(id), 0);
        }
        let again = quiz.retake();
        assert_eq!(again.title(), Some("Section 1 Knowledge Check"));
        assert_eq!(again.questions().len(), 3);
        assert_eq!(again.answered_count(), 0);
        assert!(!again.is_complete());
    }
}
