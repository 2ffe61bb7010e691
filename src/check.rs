use crate::model::Question;

/// A single question shown right after a block of content, with instant feedback.
#[derive(Debug, Clone)]
pub struct InlineCheck {
    question: Question,
    selected: Option<usize>,
}

impl InlineCheck {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Records the learner's choice. Only the first call counts; returns
    /// whether this call was the one recorded.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// `None` until answered.
    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|i| self.question.is_correct(i))
    }

    /// Explanation becomes visible once answered, whatever the outcome.
    pub fn explanation(&self) -> Option<&str> {
        self.selected.map(|_| self.question.explanation.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn abcd(correct: usize) -> Question {
        Question {
            id: QuestionId::from("check"),
            prompt: "Pick one".into(),
            options: ["A", "B", "C", "D"].map(String::from).to_vec(),
            correct_index: correct,
            explanation: "D is the answer.".into(),
            section: None,
            difficulty: None,
        }
    }

    #[test]
    fn unanswered_check_hides_feedback() {
        let check = InlineCheck::new(abcd(3));
        assert!(!check.is_answered());
        assert_eq!(check.is_correct(), None);
        assert_eq!(check.explanation(), None);
    }

    #[test]
    fn wrong_answer_still_shows_explanation() {
        let mut check = InlineCheck::new(abcd(3));
        assert!(check.select_option(0));
        assert_eq!(check.is_correct(), Some(false));
        assert_eq!(check.explanation(), Some("D is the answer."));
    }

    #[test]
    fn first_answer_is_final() {
        let mut check = InlineCheck::new(abcd(3));
        assert!(check.select_option(1));
        assert!(!check.select_option(3));
        assert!(!check.select_option(1));
        assert_eq!(check.selected(), Some(1));
        assert_eq!(check.is_correct(), Some(false));
    }

    #[test]
    fn correct_answer_is_judged_correct() {
        let mut check = InlineCheck::new(abcd(3));
        check.select_option(3);
        assert_eq!(check.is_correct(), Some(true));
    }
}
