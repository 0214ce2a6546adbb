//! Test helpers for common session setup.
//!
//! Shared across the crate's test modules and downstream consumers to reduce
//! per-test wiring.

use bevy_ecs::prelude::World;

use crate::scenario::{build_session, SessionParams};
use crate::session::Role;

pub use crate::scenario::demo_trip;

/// A session for `role` with the demo trip already active in `requested`
/// state.
pub fn create_test_session(role: Role) -> World {
    let mut world = World::new();
    build_session(
        &mut world,
        SessionParams::new(role).with_trip(demo_trip()),
    );
    world
}

/// A session for `role` with no active trip (dashboard state).
pub fn create_empty_session(role: Role) -> World {
    let mut world = World::new();
    build_session(&mut world, SessionParams::new(role));
    world
}
