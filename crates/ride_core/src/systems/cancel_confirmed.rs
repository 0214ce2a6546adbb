use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::session::{ActiveTrip, NavigationOutbox, SessionRole};
use crate::telemetry::{SessionTelemetry, TripRecord};
use crate::trip::TripStatus;

/// CancelConfirmed: the collaborator delivered the destructive choice.
/// Clears the active trip regardless of whether the ride had started, and
/// navigates to the role's home.
pub fn cancel_confirmed_system(
    event: Res<CurrentEvent>,
    role: Res<SessionRole>,
    mut active: ResMut<ActiveTrip>,
    mut nav: ResMut<NavigationOutbox>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::CancelConfirmed {
        return;
    }

    let Some(mut trip) = active.0.take() else {
        return;
    };

    let status_before = trip.status;
    trip.status = TripStatus::Cancelled;
    telemetry.rides_cancelled_total += 1;
    telemetry.records.push(TripRecord {
        trip,
        status_before,
        ended_at_seq: event.0.seq,
    });
    nav.push(role.0.home());
}
