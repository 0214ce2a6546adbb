use eframe::egui;

use crate::app::{RideApp, Screen};
use crate::ui::cancel_dialog::render_cancel_dialog;
use crate::ui::dashboard::{render_client_dashboard, render_driver_dashboard, render_role_picker};
use crate::ui::driver_navigation::render_driver_navigation;
use crate::ui::ride_tracking::render_ride_tracking;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([390.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Teranga Ride",
        options,
        Box::new(|_cc| Ok(Box::new(RideApp::new()))),
    )
}

impl eframe::App for RideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::RolePicker => render_role_picker(ui, self),
            Screen::ClientDashboard => render_client_dashboard(ui, self),
            Screen::RideTracking => render_ride_tracking(ui, self),
            Screen::DriverDashboard => render_driver_dashboard(ui, self),
            Screen::DriverNavigation => render_driver_navigation(ui, self),
        });

        // The dialog floats above whichever screen asked for it.
        render_cancel_dialog(ctx, self);
    }
}
