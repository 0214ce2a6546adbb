use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::session::ActiveTrip;
use crate::telemetry::SessionTelemetry;
use crate::trip::TripStatus;

/// StartRide: the driver begins the trip at the pickup point. Only legal
/// from `requested`; a press racing against navigation is a silent no-op.
pub fn start_ride_system(
    event: Res<CurrentEvent>,
    mut active: ResMut<ActiveTrip>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::StartRide {
        return;
    }

    let Some(trip) = active.0.as_mut() else {
        return;
    };
    if trip.status != TripStatus::Requested {
        return;
    }

    trip.status = TripStatus::InProgress;
    telemetry.rides_started_total += 1;
}
