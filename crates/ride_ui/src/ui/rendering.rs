//! Shared draw helpers for the screens.

use eframe::egui::{self, Align2, Color32, FontId, RichText, Vec2};

use crate::ui::constants::{INK, MAP_BLUE, MAP_HEIGHT, MUTED};

/// Static stand-in for the Google Maps view.
pub fn render_map_placeholder(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    let map_size = Vec2::new(ui.available_width(), MAP_HEIGHT);
    let (map_rect, _) = ui.allocate_exact_size(map_size, egui::Sense::hover());
    let painter = ui.painter_at(map_rect);

    painter.rect_filled(map_rect, 12.0, MAP_BLUE);
    painter.text(
        map_rect.center(),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(16.0),
        MUTED,
    );
    painter.text(
        map_rect.center() + Vec2::new(0.0, 22.0),
        Align2::CENTER_CENTER,
        subtitle,
        FontId::proportional(13.0),
        MUTED,
    );
}

/// One waypoint row: colored dot, small label, place name.
pub fn render_waypoint(ui: &mut egui::Ui, color: Color32, label: &str, place: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(12.0, 12.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).color(MUTED).size(12.0));
            ui.label(RichText::new(place).color(INK).size(15.0));
        });
    });
}

/// Key/value row used in the trip details card.
pub fn render_detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(MUTED).size(13.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).color(INK).size(13.0).strong());
        });
    });
}
