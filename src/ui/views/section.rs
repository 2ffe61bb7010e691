use crate::CourseApp;
use crate::model::{ContentBlock, QuestionId};
use crate::ui::helpers::question_block;
use crate::ui::layout::{page, two_button_row};
use crate::ui::views::quiz::{QuizEvent, quiz_widget};
use crate::view_models::Feedback;
use egui::{Button, Context, Frame, RichText, Vec2};
use egui_commonmark::CommonMarkViewer;

enum SectionEvent {
    AnswerCheck(QuestionId, usize),
    TogglePanel(String),
    ToggleFaq(usize),
    StartQuiz,
    Quiz(QuizEvent),
    Prev,
    Next,
}

pub fn ui_section(app: &mut CourseApp, ctx: &Context) {
    let (Some(idx), Some(session)) = (app.current_section, app.session.as_ref()) else {
        app.back_to_index();
        return;
    };
    let Some(section) = app.course.sections.get(idx) else {
        app.back_to_index();
        return;
    };
    let prev_title = app.prev_section_title().map(|t| format!("⬅ {t}"));
    let next_title = app.next_section_title().map(|t| format!("{t} ➡"));
    let cache = &mut app.cm_cache;
    let message = app.message.as_str();
    let mut events = Vec::new();

    page(ctx, 760.0, |ui, width| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("MODULE {} · SECTION {}", section.module, section.number))
                    .small()
                    .strong(),
            );
            ui.heading(&section.title);
            if let Some(subtitle) = &section.subtitle {
                ui.label(RichText::new(subtitle).weak());
            }
        });
        ui.add_space(12.0);

        if !section.outcomes.is_empty() {
            ui.label(RichText::new("Learning outcomes").strong());
            for outcome in &section.outcomes {
                ui.label(format!("✔ {outcome}"));
            }
            ui.add_space(8.0);
            ui.separator();
        }

        for (n, block) in section.blocks.iter().enumerate() {
            ui.push_id(("block", n), |ui| match block {
                ContentBlock::Text { heading, body } => {
                    if let Some(h) = heading {
                        ui.add_space(8.0);
                        ui.label(RichText::new(h).heading());
                    }
                    CommonMarkViewer::new().show(ui, cache, body);
                }
                ContentBlock::Check { question } => {
                    let feedback = session.check(&question.id).and_then(Feedback::from_check);
                    ui.add_space(6.0);
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(width - 16.0);
                        ui.label(RichText::new("Quick check").small().strong());
                        if let Some(i) = question_block(ui, question, feedback, width - 24.0) {
                            events.push(SectionEvent::AnswerCheck(question.id.clone(), i));
                        }
                    });
                    ui.add_space(6.0);
                }
                ContentBlock::Panel { name, title, body } => {
                    let open = session.panels.is_open(name);
                    let arrow = if open { "⏷" } else { "⏵" };
                    if ui
                        .add(Button::new(format!("{arrow} {title}")).frame(false))
                        .clicked()
                    {
                        events.push(SectionEvent::TogglePanel(name.clone()));
                    }
                    if open {
                        ui.indent("panel_body", |ui| {
                            CommonMarkViewer::new().show(ui, cache, body);
                        });
                    }
                }
            });
        }

        if !section.faqs.is_empty() {
            ui.add_space(12.0);
            ui.separator();
            ui.label(RichText::new("Frequently asked questions").heading());
            for (i, faq) in section.faqs.iter().enumerate() {
                let open = session.faqs.is_open(i);
                let arrow = if open { "−" } else { "+" };
                let label = RichText::new(format!("{arrow} {}", faq.question)).strong();
                if ui.add(Button::new(label).frame(false)).clicked() {
                    events.push(SectionEvent::ToggleFaq(i));
                }
                if open {
                    ui.label(&faq.answer);
                }
                ui.add_space(4.0);
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
        match &session.quiz {
            None => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Test your knowledge").heading());
                    ui.label(format!(
                        "{} questions on this section.",
                        section.quiz.questions.len()
                    ));
                    ui.add_space(6.0);
                    if ui
                        .add(Button::new("Start quiz").min_size(Vec2::new(160.0, 36.0)))
                        .clicked()
                    {
                        events.push(SectionEvent::StartQuiz);
                    }
                });
            }
            Some(quiz) => {
                if let Some(event) = quiz_widget(ui, quiz, width, message) {
                    events.push(SectionEvent::Quiz(event));
                }
            }
        }

        ui.add_space(16.0);
        ui.separator();
        let (prev, next) = two_button_row(ui, width, prev_title.as_deref(), next_title.as_deref());
        if prev {
            events.push(SectionEvent::Prev);
        }
        if next {
            events.push(SectionEvent::Next);
        }
    });

    for event in events {
        match event {
            SectionEvent::AnswerCheck(id, i) => app.answer_check(&id, i),
            SectionEvent::TogglePanel(name) => app.toggle_panel(&name),
            SectionEvent::ToggleFaq(i) => app.toggle_faq(i),
            SectionEvent::StartQuiz => app.start_quiz(),
            SectionEvent::Quiz(QuizEvent::Answer(id, i)) => app.answer_quiz(&id, i),
            SectionEvent::Quiz(QuizEvent::Retake) => app.retake_quiz(),
            SectionEvent::Prev => app.prev_section(),
            SectionEvent::Next => app.next_section(),
        }
    }
}
