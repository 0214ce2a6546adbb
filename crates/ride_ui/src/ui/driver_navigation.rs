//! Driver-facing navigation screen: trip banner, map placeholder, start and
//! cancel controls, trip details.

use eframe::egui::{self, Button, RichText};

use ride_core::events::EventKind;
use ride_core::trip::TripStatus;

use crate::app::RideApp;
use crate::ui::constants::{ACCENT_YELLOW, DANGER_RED, INK, MUTED, SUCCESS_GREEN};
use crate::ui::rendering::{render_detail_row, render_map_placeholder};
use crate::ui::utils::{format_duration_min, format_price_fcfa, status_label};

pub fn render_driver_navigation(ui: &mut egui::Ui, app: &mut RideApp) {
    let Some(trip) = app.active_trip() else {
        ui.label("Aucune course active.");
        return;
    };

    // Top info banner
    ui.horizontal(|ui| {
        if ui.button("‹").clicked() {
            app.push_event(EventKind::NavigateBack);
        }
        ui.vertical(|ui| {
            ui.label(RichText::new("Destination").color(MUTED).size(13.0));
            ui.label(
                RichText::new(&trip.destination)
                    .color(INK)
                    .size(17.0)
                    .strong(),
            );
            ui.label(
                RichText::new(format!("Client: {}", trip.client_name))
                    .color(MUTED)
                    .size(13.0),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(format_price_fcfa(trip.price_fcfa))
                        .color(ACCENT_YELLOW)
                        .size(21.0)
                        .strong(),
                );
                ui.label(
                    RichText::new(format!("{} places", trip.seats))
                        .color(MUTED)
                        .size(13.0),
                );
            });
        });
    });
    ui.add_space(8.0);

    render_map_placeholder(
        ui,
        "Navigation Google Maps",
        &format!("{} → {}", trip.origin, trip.destination),
    );
    ui.add_space(12.0);

    // Controls
    match trip.status {
        TripStatus::Requested => {
            let start = Button::new(
                RichText::new("Démarrer la course")
                    .color(egui::Color32::WHITE)
                    .size(15.0),
            )
            .fill(SUCCESS_GREEN)
            .min_size(egui::vec2(ui.available_width(), 44.0));
            if ui.add(start).clicked() {
                app.push_event(EventKind::StartRide);
            }
        }
        status => {
            ui.label(RichText::new(status_label(status)).color(SUCCESS_GREEN).size(15.0));
        }
    }
    ui.add_space(6.0);

    let cancel = Button::new(RichText::new("Annuler la course").color(DANGER_RED).size(15.0))
        .min_size(egui::vec2(ui.available_width(), 40.0));
    if ui.add(cancel).clicked() {
        app.push_event(EventKind::CancelRequested);
    }
    ui.add_space(12.0);

    // Trip details
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Détails du trajet").color(MUTED).size(13.0));
        ui.add_space(6.0);
        render_detail_row(ui, "Distance", &format!("{:.0} km", trip.distance_km));
        render_detail_row(ui, "Durée estimée", &format_duration_min(trip.duration_min));
        render_detail_row(ui, "Paiement", trip.payment.label());
    });
}
