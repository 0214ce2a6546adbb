use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::session::{ActiveTrip, NavigationOutbox, SessionRole};
use crate::telemetry::{SessionTelemetry, TripRecord};
use crate::trip::TripStatus;

/// CompleteRide: the trip ends. Records the terminal trip, clears the active
/// reference and emits exactly one navigation command to the role's home.
pub fn complete_ride_system(
    event: Res<CurrentEvent>,
    role: Res<SessionRole>,
    mut active: ResMut<ActiveTrip>,
    mut nav: ResMut<NavigationOutbox>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::CompleteRide {
        return;
    }

    let Some(mut trip) = active.0.take() else {
        return;
    };

    let status_before = trip.status;
    trip.status = TripStatus::Completed;
    telemetry.rides_completed_total += 1;
    telemetry.records.push(TripRecord {
        trip,
        status_before,
        ended_at_seq: event.0.seq,
    });
    nav.push(role.0.home());
}
