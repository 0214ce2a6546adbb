//! Session telemetry: lifecycle counters plus one record per terminated trip.

use bevy_ecs::prelude::Resource;

use crate::trip::{Trip, TripStatus};

/// One terminated trip, recorded in the same event that clears the active
/// reference. `trip.status` carries the terminal status.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub trip: Trip,
    /// Status the trip held when the terminating event arrived.
    pub status_before: TripStatus,
    /// Interaction sequence number of the terminating event.
    pub ended_at_seq: u64,
}

impl TripRecord {
    pub fn was_cancelled(&self) -> bool {
        self.trip.status == TripStatus::Cancelled
    }

    /// Whether the ride had been started before it terminated.
    pub fn was_started(&self) -> bool {
        self.status_before == TripStatus::InProgress
    }
}

#[derive(Debug, Default, Resource)]
pub struct SessionTelemetry {
    pub rides_started_total: u64,
    pub rides_completed_total: u64,
    pub rides_cancelled_total: u64,
    pub cancel_prompts_shown_total: u64,
    pub cancel_prompts_kept_total: u64,
    pub records: Vec<TripRecord>,
}
