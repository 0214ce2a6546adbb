//! Role picker and the two home dashboards the terminating transitions
//! navigate back to.

use eframe::egui::{self, Button, RichText};

use ride_core::session::Role;
use ride_core::telemetry::SessionTelemetry;

use crate::app::RideApp;
use crate::ui::constants::{ACCENT_YELLOW, INK, MUTED, SUCCESS_GREEN};
use crate::ui::rendering::render_detail_row;

pub fn render_role_picker(ui: &mut egui::Ui, app: &mut RideApp) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Teranga Ride").color(INK).size(26.0).strong());
        ui.label(RichText::new("Démo du cycle de vie d'une course").color(MUTED));
        ui.add_space(40.0);

        let client = Button::new(RichText::new("Continuer comme client").size(15.0))
            .fill(ACCENT_YELLOW)
            .min_size(egui::vec2(240.0, 44.0));
        if ui.add(client).clicked() {
            app.start_session(Role::Client);
        }
        ui.add_space(10.0);

        let driver = Button::new(
            RichText::new("Continuer comme chauffeur")
                .color(egui::Color32::WHITE)
                .size(15.0),
        )
        .fill(SUCCESS_GREEN)
        .min_size(egui::vec2(240.0, 44.0));
        if ui.add(driver).clicked() {
            app.start_session(Role::Driver);
        }
    });
}

pub fn render_client_dashboard(ui: &mut egui::Ui, app: &mut RideApp) {
    render_dashboard(ui, app, "Tableau de bord client", "Réserver une course");
}

pub fn render_driver_dashboard(ui: &mut egui::Ui, app: &mut RideApp) {
    render_dashboard(ui, app, "Tableau de bord chauffeur", "Nouvelle course");
}

fn render_dashboard(ui: &mut egui::Ui, app: &mut RideApp, title: &str, book_label: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).color(INK).size(20.0).strong());
    ui.add_space(12.0);

    if app.active_trip().is_some() {
        if ui.button("Reprendre la course en cours").clicked() {
            app.show_active_ride();
        }
    } else {
        let book = Button::new(RichText::new(book_label).color(INK).size(15.0).strong())
            .fill(ACCENT_YELLOW)
            .min_size(egui::vec2(ui.available_width(), 44.0));
        if ui.add(book).clicked() {
            app.book_demo_trip();
        }
    }
    ui.add_space(16.0);

    // Session summary straight from the core's telemetry.
    let (started, completed, cancelled, prompts_kept) = {
        let telemetry = app.world.resource::<SessionTelemetry>();
        (
            telemetry.rides_started_total,
            telemetry.rides_completed_total,
            telemetry.rides_cancelled_total,
            telemetry.cancel_prompts_kept_total,
        )
    };
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Cette session").color(MUTED).size(13.0));
        ui.add_space(6.0);
        render_detail_row(ui, "Courses démarrées", &started.to_string());
        render_detail_row(ui, "Courses terminées", &completed.to_string());
        render_detail_row(ui, "Courses annulées", &cancelled.to_string());
        render_detail_row(ui, "Annulations abandonnées", &prompts_kept.to_string());
    });
    ui.add_space(16.0);

    if ui.button("Changer de rôle").clicked() {
        app.back_to_role_picker();
    }
}
