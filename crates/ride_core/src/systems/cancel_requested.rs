use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::prompt::{CancelPrompt, PendingPrompt};
use crate::session::{ActiveTrip, SessionRole};
use crate::telemetry::SessionTelemetry;

/// CancelRequested: opens the confirmation prompt. State only changes later,
/// if the collaborator delivers the confirm choice.
pub fn cancel_requested_system(
    event: Res<CurrentEvent>,
    role: Res<SessionRole>,
    active: Res<ActiveTrip>,
    mut pending: ResMut<PendingPrompt>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::CancelRequested {
        return;
    }

    if active.0.is_none() {
        return;
    }
    // The dialog is modal; a duplicate request while one is open is ignored
    // so the collaborator still answers exactly once.
    if pending.0.is_some() {
        return;
    }

    pending.0 = Some(CancelPrompt::for_role(role.0));
    telemetry.cancel_prompts_shown_total += 1;
}
