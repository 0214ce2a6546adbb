use bevy_ecs::prelude::Resource;

use crate::trip::{Trip, TripStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Driver,
    Client,
}

impl Role {
    /// Home view for this role; every terminating transition navigates here.
    pub fn home(self) -> NavTarget {
        match self {
            Role::Driver => NavTarget::DriverDashboard,
            Role::Client => NavTarget::ClientDashboard,
        }
    }
}

/// The role this session acts as; fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SessionRole(pub Role);

/// The single active trip of the session, if any. Terminating transitions
/// clear it in the same event that records the outcome.
#[derive(Debug, Default, Resource)]
pub struct ActiveTrip(pub Option<Trip>);

impl ActiveTrip {
    pub fn status(&self) -> Option<TripStatus> {
        self.0.as_ref().map(|trip| trip.status)
    }
}

/// View a navigation command may target. "Unchanged" is expressed by not
/// emitting a command at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    DriverDashboard,
    ClientDashboard,
}

/// Outbound navigation commands, drained by the shell after each processed
/// event.
#[derive(Debug, Default, Resource)]
pub struct NavigationOutbox {
    commands: Vec<NavTarget>,
}

impl NavigationOutbox {
    pub fn push(&mut self, target: NavTarget) {
        self.commands.push(target);
    }

    pub fn drain(&mut self) -> Vec<NavTarget> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
