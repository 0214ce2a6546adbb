use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Requested,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wave,
    OrangeMoney,
    Cash,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Wave => "Wave",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::Cash => "Espèces",
        }
    }
}

/// One trip as seen by the current session. The descriptive fields are fixed
/// at booking time; only `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Assigned by the booking flow; kept for future server reconciliation.
    pub id: String,
    pub status: TripStatus,
    pub origin: String,
    pub destination: String,
    pub client_name: String,
    pub driver_name: String,
    pub driver_rating: f32,
    /// Model and plate, e.g. "Toyota Corolla • DK-1234-AB".
    pub vehicle: String,
    pub price_fcfa: u32,
    pub seats: u8,
    pub distance_km: f64,
    /// Estimated door-to-door duration.
    pub duration_min: u32,
    /// Minutes until the driver reaches the pickup point.
    pub pickup_eta_min: u32,
    pub payment: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!TripStatus::Requested.is_terminal());
        assert!(!TripStatus::InProgress.is_terminal());
        assert!(TripStatus::Completed.is_terminal());
        assert!(TripStatus::Cancelled.is_terminal());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TripStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in_progress\"");

        let back: TripStatus = serde_json::from_str("\"cancelled\"").expect("deserialize");
        assert_eq!(back, TripStatus::Cancelled);
    }
}
