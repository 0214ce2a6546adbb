//! Formatting helpers for the screens.

use ride_core::trip::TripStatus;

/// FCFA amounts grouped by thousands, e.g. "15 000 F".
pub fn format_price_fcfa(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{grouped} F")
}

/// "3h 45min" for long trips, "55 min" below one hour.
pub fn format_duration_min(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, _) => format!("{mins} min"),
        (_, 0) => format!("{hours}h"),
        _ => format!("{hours}h {mins:02}min"),
    }
}

pub fn status_label(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Requested => "En attente du départ",
        TripStatus::InProgress => "Course en cours",
        TripStatus::Completed => "Course terminée",
        TripStatus::Cancelled => "Course annulée",
    }
}
