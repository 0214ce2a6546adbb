use eframe::egui::{self, Align2, Color32, RichText};

use ride_core::prompt::CancelChoice;

use crate::app::RideApp;
use crate::ui::constants::DANGER_RED;

/// Modal two-choice confirmation, rendered whenever the core has a prompt
/// outstanding. The destructive choice is the only path to a cancellation.
pub fn render_cancel_dialog(ctx: &egui::Context, app: &mut RideApp) {
    let Some(prompt) = app.pending_prompt() else {
        return;
    };

    egui::Window::new(prompt.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(300.0);
            ui.label(prompt.message.as_str());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(prompt.keep_label.as_str()).clicked() {
                    app.answer_prompt(CancelChoice::Keep);
                }
                let confirm = egui::Button::new(
                    RichText::new(prompt.confirm_label.as_str()).color(Color32::WHITE),
                )
                .fill(DANGER_RED);
                if ui.add(confirm).clicked() {
                    app.answer_prompt(CancelChoice::Confirm);
                }
            });
        });
}
