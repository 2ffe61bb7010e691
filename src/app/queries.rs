use super::*;

impl CourseApp {
    pub fn section_infos(&self) -> Vec<SectionInfo> {
        self.course
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| SectionInfo {
                idx,
                module: s.module,
                number: s.number,
                title: s.title.clone(),
                check_count: s.checks().count(),
                quiz_len: s.quiz.questions.len(),
            })
            .collect()
    }

    pub fn next_section_title(&self) -> Option<&str> {
        let i = self.current_section?;
        self.course.sections.get(i + 1).map(|s| s.title.as_str())
    }

    pub fn prev_section_title(&self) -> Option<&str> {
        let i = self.current_section?.checked_sub(1)?;
        self.course.sections.get(i).map(|s| s.title.as_str())
    }
}
