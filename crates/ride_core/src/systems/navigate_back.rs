use bevy_ecs::prelude::{Res, ResMut};

use crate::events::{CurrentEvent, EventKind};
use crate::session::{NavigationOutbox, SessionRole};

/// NavigateBack: pure navigation to the role's home. Never implies a
/// cancellation; the active trip keeps running.
pub fn navigate_back_system(
    event: Res<CurrentEvent>,
    role: Res<SessionRole>,
    mut nav: ResMut<NavigationOutbox>,
) {
    if event.0.kind != EventKind::NavigateBack {
        return;
    }

    nav.push(role.0.home());
}
