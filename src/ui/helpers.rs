// src/ui/helpers.rs
use crate::model::Question;
use crate::view_models::{Feedback, OptionView, verdict};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

const GREEN: Color32 = Color32::from_rgb(46, 160, 67);
const RED: Color32 = Color32::from_rgb(218, 54, 51);

pub fn big_list_button(
    ui: &mut Ui,
    label: String,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// One answer option. Returns true when clicked while still answerable.
pub fn option_button(ui: &mut Ui, text: &str, view: OptionView, width: f32) -> bool {
    let marker = view.marker();
    let label = if marker.is_empty() {
        text.to_owned()
    } else {
        format!("{marker}  {text}")
    };
    let (fill, stroke) = match view {
        OptionView::ChosenCorrect => (Some(GREEN.gamma_multiply(0.35)), Stroke::new(1.5, GREEN)),
        OptionView::ChosenWrong => (Some(RED.gamma_multiply(0.35)), Stroke::new(1.5, RED)),
        OptionView::RevealedCorrect => (None, Stroke::new(1.5, GREEN)),
        OptionView::Open | OptionView::Inactive => (None, Stroke::NONE),
    };

    let mut button = Button::new(RichText::new(label)).min_size(Vec2::new(width, 32.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    if stroke != Stroke::NONE {
        button = button.stroke(stroke);
    }
    ui.add_enabled(view == OptionView::Open, button).clicked()
}

/// Options, then verdict and explanation once answered.
/// Returns the option index clicked this frame, if any.
pub fn question_block(
    ui: &mut Ui,
    q: &Question,
    feedback: Option<Feedback<'_>>,
    width: f32,
) -> Option<usize> {
    let mut clicked = None;
    let selected = feedback.map(|f| f.selected);
    ui.label(RichText::new(&q.prompt).strong());
    ui.add_space(6.0);
    for (i, option) in q.options.iter().enumerate() {
        let view = OptionView::for_option(i, q.correct_index, selected);
        if option_button(ui, option, view, width) {
            clicked = Some(i);
        }
        ui.add_space(2.0);
    }
    if let Some(f) = feedback {
        ui.add_space(6.0);
        let colour = if f.correct { GREEN } else { RED };
        ui.label(RichText::new(verdict(f.correct)).color(colour));
        ui.label(f.explanation);
    }
    clicked
}
