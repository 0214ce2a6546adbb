//! Interaction runner: drains the queue and routes events into the ECS.
//!
//! Each step pops the next interaction from [InteractionQueue], inserts it as
//! [CurrentEvent], then runs the schedule. Interactions run to completion in
//! arrival order; nothing overlaps.

use bevy_ecs::prelude::Res;
use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::events::{CurrentEvent, EventKind, InteractionQueue};
use crate::systems::{
    cancel_confirmed::cancel_confirmed_system, cancel_dismissed::cancel_dismissed_system,
    cancel_requested::cancel_requested_system, complete_ride::complete_ride_system,
    navigate_back::navigate_back_system, start_ride::start_ride_system,
};

// Condition functions for each event kind
fn is_start_ride(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::StartRide)
        .unwrap_or(false)
}

fn is_complete_ride(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CompleteRide)
        .unwrap_or(false)
}

fn is_cancel_requested(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CancelRequested)
        .unwrap_or(false)
}

fn is_cancel_confirmed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CancelConfirmed)
        .unwrap_or(false)
}

fn is_cancel_dismissed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CancelDismissed)
        .unwrap_or(false)
}

fn is_navigate_back(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::NavigateBack)
        .unwrap_or(false)
}

/// Runs one step: pops the next interaction, inserts it as [CurrentEvent],
/// then runs the schedule. Returns `false` if the queue was empty.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<InteractionQueue>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs steps until the queue is empty or `max_steps` is reached.
/// Returns the number of steps executed.
pub fn run_until_idle(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Builds the interaction schedule: every lifecycle system, each gated on
/// its event kind so only the matching system does work per step.
pub fn interaction_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.add_systems((
        // StartRide
        start_ride_system.run_if(is_start_ride),
        // CompleteRide
        complete_ride_system.run_if(is_complete_ride),
        // CancelRequested
        cancel_requested_system.run_if(is_cancel_requested),
        // CancelConfirmed
        cancel_confirmed_system.run_if(is_cancel_confirmed),
        // CancelDismissed
        cancel_dismissed_system.run_if(is_cancel_dismissed),
        // NavigateBack
        navigate_back_system.run_if(is_navigate_back),
    ));

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ActiveTrip, Role};
    use crate::test_helpers::create_test_session;
    use crate::trip::TripStatus;

    #[test]
    fn run_next_event_reports_an_empty_queue() {
        let mut world = create_test_session(Role::Client);
        let mut schedule = interaction_schedule();

        assert!(!run_next_event(&mut world, &mut schedule));
    }

    #[test]
    fn run_until_idle_processes_queued_interactions_in_order() {
        let mut world = create_test_session(Role::Driver);
        let mut schedule = interaction_schedule();

        {
            let mut queue = world.resource_mut::<InteractionQueue>();
            queue.push(EventKind::StartRide);
            queue.push(EventKind::NavigateBack);
        }

        let steps = run_until_idle(&mut world, &mut schedule, 8);
        assert_eq!(steps, 2);
        assert_eq!(
            world.resource::<ActiveTrip>().status(),
            Some(TripStatus::InProgress)
        );
    }
}
