mod app;
mod ui;

use std::fs::File;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

fn main() -> eframe::Result<()> {
    // File logger; the core itself stays silent and reports via telemetry.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("teranga_ride.log") {
        let _ = WriteLogger::init(LevelFilter::Info, log_config, log_file);
    }

    log::info!("Teranga Ride shell starting");
    ui::app_shell::run()
}
