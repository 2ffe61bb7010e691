mod helpers;
pub mod layout;
pub mod views;

use crate::app::CourseApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for CourseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if matches!(self.state, AppState::Section | AppState::MockExam) {
            top_panel(self, ctx);
        }

        bottom_panel(ctx);

        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Section => views::section::ui_section(self, ctx),
            AppState::MockExam => views::mock_exam::ui_mock_exam(self, ctx),
        }
    }
}
