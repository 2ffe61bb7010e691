use crate::CourseApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("☰ Course index").clicked() {
                app.back_to_index();
            }
            if let Some(section) = app.section() {
                ui.separator();
                ui.label(format!("Module {} · Section {}", section.module, section.number));
            } else if matches!(app.state, AppState::MockExam) {
                ui.separator();
                ui.label(&app.bank.title);
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Scrollable page with a capped content width, centred horizontally.
pub fn page(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui, f32)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let width = (ui.available_width() * 0.97).min(max_width);
                let side = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        Frame::default()
                            .fill(ui.visuals().window_fill())
                            .inner_margin(egui::Margin::symmetric(16, 20))
                            .show(ui, |ui| inner(ui, width - 32.0));
                    });
                });
            });
    });
}

/// Two equal-width buttons in a row. Returns (left clicked, right clicked).
/// A `None` label leaves that slot empty.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: Option<&str>,
    right_label: Option<&str>,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        match left_label {
            Some(label) => {
                clicked_left = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
            }
            None => ui.add_space(btn_w),
        }
        ui.add_space(8.0);
        if let Some(label) = right_label {
            clicked_right = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
        }
    });
    (clicked_left, clicked_right)
}
