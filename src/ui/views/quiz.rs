use crate::model::QuestionId;
use crate::quiz::QuizSession;
use crate::ui::helpers::question_block;
use crate::view_models::{Feedback, progress_line};
use egui::{Button, Frame, RichText, Ui};

pub enum QuizEvent {
    Answer(QuestionId, usize),
    Retake,
}

/// Draws every question of the quiz with its own feedback, then the score.
pub fn quiz_widget(
    ui: &mut Ui,
    quiz: &QuizSession,
    width: f32,
    message: &str,
) -> Option<QuizEvent> {
    let mut event = None;
    let total = quiz.questions().len();

    if let Some(title) = quiz.title() {
        ui.heading(title);
    }
    ui.label(RichText::new(progress_line(quiz.score(), quiz.answered_count())).weak());
    ui.add_space(10.0);

    for (n, q) in quiz.questions().iter().enumerate() {
        let feedback = Feedback::from_quiz(quiz, &q.id);
        ui.push_id(("quiz_question", n), |ui| {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.label(RichText::new(format!("Question {} of {total}", n + 1)).small().weak());
                if let Some(i) = question_block(ui, q, feedback, width - 24.0) {
                    event = Some(QuizEvent::Answer(q.id.clone(), i));
                }
            });
        });
        ui.add_space(8.0);
    }

    if quiz.is_complete() {
        ui.add_space(6.0);
        if !message.is_empty() {
            ui.label(RichText::new(message).strong());
        }
        ui.add_space(6.0);
        if ui.add_sized([width / 2.0, 36.0], Button::new("⟲ Retake")).clicked() {
            event = Some(QuizEvent::Retake);
        }
    }

    event
}
