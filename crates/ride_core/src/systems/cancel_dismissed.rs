use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::telemetry::SessionTelemetry;

/// CancelDismissed: the user kept the ride (or dismissed the dialog).
/// Trip state and navigation are untouched; only the counter moves.
pub fn cancel_dismissed_system(
    event: Res<CurrentEvent>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::CancelDismissed {
        return;
    }

    telemetry.cancel_prompts_kept_total += 1;
}
