use crate::CourseApp;
use crate::ui::layout::page;
use crate::ui::views::quiz::{QuizEvent, quiz_widget};
use egui::Context;

pub fn ui_mock_exam(app: &mut CourseApp, ctx: &Context) {
    let Some(exam) = app.exam.as_ref() else {
        app.back_to_index();
        return;
    };
    let message = app.message.as_str();
    let mut event = None;

    page(ctx, 760.0, |ui, width| {
        event = quiz_widget(ui, exam, width, message);
    });

    match event {
        Some(QuizEvent::Answer(id, i)) => app.answer_exam(&id, i),
        Some(QuizEvent::Retake) => app.retake_exam(),
        None => {}
    }
}
