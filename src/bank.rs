use crate::model::{Question, QuestionBank};
use crate::quiz::QuizSession;
use rand::Rng;
use rand::seq::SliceRandom;

impl QuestionBank {
    pub fn by_section(&self, section: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.section.as_deref() == Some(section))
            .collect()
    }

    /// Distinct section tags in bank order.
    pub fn sections(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.questions.iter().filter_map(|q| q.section.as_deref()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// `count` distinct questions spread as evenly as possible across the
    /// section tags, in random order. Untagged questions form one more group.
    /// Asking for more than the bank holds returns the whole bank, shuffled.
    pub fn balanced_sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        let mut groups: Vec<Vec<&Question>> =
            self.sections().into_iter().map(|tag| self.by_section(tag)).collect();
        let untagged: Vec<&Question> =
            self.questions.iter().filter(|q| q.section.is_none()).collect();
        if !untagged.is_empty() {
            groups.push(untagged);
        }
        for group in &mut groups {
            group.shuffle(rng);
        }
        // Sections that get the leftover slots change from draw to draw.
        groups.shuffle(rng);

        let mut picked = Vec::with_capacity(count.min(self.questions.len()));
        while picked.len() < count && groups.iter().any(|g| !g.is_empty()) {
            for group in &mut groups {
                if picked.len() == count {
                    break;
                }
                if let Some(q) = group.pop() {
                    picked.push(q.clone());
                }
            }
        }
        picked.shuffle(rng);
        picked
    }

    pub fn mock_exam<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> QuizSession {
        let questions = self.balanced_sample(count, rng);
        log::debug!(
            "mock exam drawn: {} of {} questions over {} sections",
            questions.len(),
            self.questions.len(),
            self.sections().len()
        );
        QuizSession::new(Some(format!("{} mock exam", self.title)), questions)
    }
}
