pub mod start_ride;
pub mod complete_ride;
pub mod cancel_requested;
pub mod cancel_confirmed;
pub mod cancel_dismissed;
pub mod navigate_back;

#[cfg(test)]
mod end_to_end_tests {
    use crate::events::{EventKind, InteractionQueue};
    use crate::prompt::{deliver_cancel_choice, CancelChoice, PendingPrompt};
    use crate::runner::{interaction_schedule, run_until_idle};
    use crate::scenario::assign_trip;
    use crate::session::{ActiveTrip, NavTarget, NavigationOutbox, Role};
    use crate::telemetry::SessionTelemetry;
    use crate::test_helpers::{create_test_session, demo_trip};
    use crate::trip::TripStatus;

    const MAX_STEPS: usize = 16;

    fn push_and_run(
        world: &mut bevy_ecs::prelude::World,
        schedule: &mut bevy_ecs::prelude::Schedule,
        kind: EventKind,
    ) {
        world.resource_mut::<InteractionQueue>().push(kind);
        let steps = run_until_idle(world, schedule, MAX_STEPS);
        assert!(steps < MAX_STEPS, "runner did not converge");
    }

    #[test]
    fn client_journey_start_then_cancel_confirm() {
        let mut world = create_test_session(Role::Client);
        let mut schedule = interaction_schedule();

        push_and_run(&mut world, &mut schedule, EventKind::StartRide);
        assert_eq!(
            world.resource::<ActiveTrip>().status(),
            Some(TripStatus::InProgress)
        );

        push_and_run(&mut world, &mut schedule, EventKind::CancelRequested);
        assert!(world.resource::<PendingPrompt>().0.is_some());
        // Trip untouched while the prompt is open.
        assert_eq!(
            world.resource::<ActiveTrip>().status(),
            Some(TripStatus::InProgress)
        );

        assert!(deliver_cancel_choice(&mut world, CancelChoice::Confirm));
        run_until_idle(&mut world, &mut schedule, MAX_STEPS);

        assert!(world.resource::<ActiveTrip>().0.is_none());
        let mut nav = world.resource_mut::<NavigationOutbox>();
        assert_eq!(nav.drain(), vec![NavTarget::ClientDashboard]);

        let telemetry = world.resource::<SessionTelemetry>();
        assert_eq!(telemetry.rides_started_total, 1);
        assert_eq!(telemetry.rides_cancelled_total, 1);
        assert_eq!(telemetry.records.len(), 1);
        assert!(telemetry.records[0].was_cancelled());
        assert!(telemetry.records[0].was_started());
    }

    #[test]
    fn keeping_the_ride_changes_nothing() {
        let mut world = create_test_session(Role::Driver);
        let mut schedule = interaction_schedule();
        let before = world.resource::<ActiveTrip>().0.clone().expect("trip");

        push_and_run(&mut world, &mut schedule, EventKind::CancelRequested);
        assert!(deliver_cancel_choice(&mut world, CancelChoice::Keep));
        run_until_idle(&mut world, &mut schedule, MAX_STEPS);

        let after = world.resource::<ActiveTrip>().0.clone().expect("trip");
        assert_eq!(after, before, "continue branch must be side-effect free");
        assert!(world.resource::<NavigationOutbox>().is_empty());
        assert!(world.resource::<PendingPrompt>().0.is_none());

        let telemetry = world.resource::<SessionTelemetry>();
        assert_eq!(telemetry.cancel_prompts_shown_total, 1);
        assert_eq!(telemetry.cancel_prompts_kept_total, 1);
        assert_eq!(telemetry.rides_cancelled_total, 0);
    }

    #[test]
    fn completing_a_ride_emits_exactly_one_navigation() {
        let mut world = create_test_session(Role::Client);
        let mut schedule = interaction_schedule();

        push_and_run(&mut world, &mut schedule, EventKind::StartRide);
        push_and_run(&mut world, &mut schedule, EventKind::CompleteRide);

        assert!(world.resource::<ActiveTrip>().0.is_none());
        let mut nav = world.resource_mut::<NavigationOutbox>();
        assert_eq!(nav.drain(), vec![NavTarget::ClientDashboard]);

        let telemetry = world.resource::<SessionTelemetry>();
        assert_eq!(telemetry.rides_completed_total, 1);
        assert_eq!(telemetry.records[0].trip.status, TripStatus::Completed);
    }

    #[test]
    fn cancel_confirm_clears_a_ride_that_never_started() {
        let mut world = create_test_session(Role::Driver);
        let mut schedule = interaction_schedule();

        push_and_run(&mut world, &mut schedule, EventKind::CancelRequested);
        assert!(deliver_cancel_choice(&mut world, CancelChoice::Confirm));
        run_until_idle(&mut world, &mut schedule, MAX_STEPS);

        assert!(world.resource::<ActiveTrip>().0.is_none());
        let record = &world.resource::<SessionTelemetry>().records[0];
        assert_eq!(record.status_before, TripStatus::Requested);
        assert!(record.was_cancelled());
    }

    #[test]
    fn everything_is_a_noop_once_cleared_until_a_new_trip_arrives() {
        let mut world = create_test_session(Role::Client);
        let mut schedule = interaction_schedule();

        push_and_run(&mut world, &mut schedule, EventKind::CompleteRide);
        assert!(world.resource::<ActiveTrip>().0.is_none());
        world.resource_mut::<NavigationOutbox>().drain();

        push_and_run(&mut world, &mut schedule, EventKind::StartRide);
        push_and_run(&mut world, &mut schedule, EventKind::CompleteRide);
        push_and_run(&mut world, &mut schedule, EventKind::CancelRequested);

        assert!(world.resource::<ActiveTrip>().0.is_none());
        assert!(world.resource::<PendingPrompt>().0.is_none());
        assert!(world.resource::<NavigationOutbox>().is_empty());

        let telemetry = world.resource::<SessionTelemetry>();
        assert_eq!(telemetry.rides_started_total, 0);
        assert_eq!(telemetry.rides_completed_total, 1);
        assert_eq!(telemetry.records.len(), 1);

        // A new booking from outside resumes the lifecycle.
        assert!(assign_trip(&mut world, demo_trip()));
        push_and_run(&mut world, &mut schedule, EventKind::StartRide);
        assert_eq!(
            world.resource::<ActiveTrip>().status(),
            Some(TripStatus::InProgress)
        );
    }

    #[test]
    fn back_navigation_never_cancels() {
        let mut world = create_test_session(Role::Driver);
        let mut schedule = interaction_schedule();

        push_and_run(&mut world, &mut schedule, EventKind::StartRide);
        push_and_run(&mut world, &mut schedule, EventKind::NavigateBack);

        assert_eq!(
            world.resource::<ActiveTrip>().status(),
            Some(TripStatus::InProgress)
        );
        let mut nav = world.resource_mut::<NavigationOutbox>();
        assert_eq!(nav.drain(), vec![NavTarget::DriverDashboard]);
        assert_eq!(world.resource::<SessionTelemetry>().rides_cancelled_total, 0);
    }
}
