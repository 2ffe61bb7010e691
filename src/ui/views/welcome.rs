use crate::CourseApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::page;
use egui::{Context, RichText};

pub fn ui_welcome(app: &mut CourseApp, ctx: &Context) {
    let infos = app.section_infos();
    let mut open = None;
    let mut exam = false;

    page(ctx, 600.0, |ui, width| {
        ui.vertical_centered(|ui| {
            ui.heading(&app.course.title);
            ui.add_space(6.0);
            ui.label("Choose a section to study.");
        });
        ui.add_space(16.0);

        for info in &infos {
            if big_list_button(ui, info.label(), width, 40.0, true) {
                open = Some(info.idx);
            }
            ui.label(RichText::new(info.detail()).weak());
            ui.add_space(8.0);
        }

        ui.separator();
        ui.add_space(8.0);
        let label = format!(
            "📝 Mock exam ({} questions from {})",
            app.config.mock_exam_size.min(app.bank.questions.len()),
            app.bank.title
        );
        exam = big_list_button(ui, label, width, 40.0, !app.bank.questions.is_empty());

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });

    if let Some(idx) = open {
        app.open_section(idx);
    } else if exam {
        app.start_mock_exam();
    }
}
