//! Client-facing ride tracking screen: map placeholder, status banner,
//! driver card, waypoints, complete and cancel controls.

use eframe::egui::{self, Button, RichText};

use ride_core::events::EventKind;
use ride_core::trip::TripStatus;

use crate::app::RideApp;
use crate::ui::constants::{ACCENT_YELLOW, DANGER_RED, INK, MUTED, SUCCESS_GREEN};
use crate::ui::rendering::{render_map_placeholder, render_waypoint};
use crate::ui::utils::status_label;

pub fn render_ride_tracking(ui: &mut egui::Ui, app: &mut RideApp) {
    let Some(trip) = app.active_trip() else {
        ui.label("Aucune course active.");
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("‹").clicked() {
            app.push_event(EventKind::NavigateBack);
        }
        ui.heading("Votre course");
    });
    ui.add_space(4.0);

    render_map_placeholder(ui, "Carte Google Maps", &trip.destination);
    ui.add_space(8.0);

    // Status banner
    let banner = match trip.status {
        TripStatus::Requested => format!(
            "Chauffeur en route ! Arrivée estimée dans {} min",
            trip.pickup_eta_min
        ),
        status => status_label(status).to_owned(),
    };
    ui.label(RichText::new(banner).color(SUCCESS_GREEN).size(14.0));
    ui.add_space(8.0);

    // Driver card
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&trip.driver_name)
                        .color(INK)
                        .size(17.0)
                        .strong(),
                );
                ui.label(RichText::new(&trip.vehicle).color(MUTED).size(13.0));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(
                    RichText::new(format!("★ {:.1}", trip.driver_rating))
                        .color(ACCENT_YELLOW)
                        .size(14.0),
                );
            });
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            // Call and message are presentation stubs, as in the mock.
            let _ = ui.button("Appeler");
            let _ = ui.button("Message");
        });
        ui.add_space(10.0);
        ui.separator();
        render_waypoint(ui, SUCCESS_GREEN, "Point de départ", &trip.origin);
        render_waypoint(ui, DANGER_RED, "Destination", &trip.destination);
    });
    ui.add_space(12.0);

    let complete = Button::new(
        RichText::new("Terminer la course")
            .color(INK)
            .size(15.0)
            .strong(),
    )
    .fill(ACCENT_YELLOW)
    .min_size(egui::vec2(ui.available_width(), 44.0));
    if ui.add(complete).clicked() {
        app.push_event(EventKind::CompleteRide);
    }
    ui.add_space(6.0);

    let cancel = Button::new(RichText::new("Annuler la course").color(DANGER_RED).size(15.0))
        .min_size(egui::vec2(ui.available_width(), 40.0));
    if ui.add(cancel).clicked() {
        app.push_event(EventKind::CancelRequested);
    }
}
