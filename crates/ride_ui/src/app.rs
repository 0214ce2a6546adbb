//! Application state for the mobile shell: one session world plus screen
//! routing. The shell pushes interactions into the core, pumps the queue,
//! then follows whatever navigation commands come back out.

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ride_core::events::{EventKind, InteractionQueue};
use ride_core::prompt::{deliver_cancel_choice, CancelChoice, CancelPrompt, PendingPrompt};
use ride_core::runner::{interaction_schedule, run_until_idle};
use ride_core::scenario::{assign_trip, build_session, demo_trip, random_demo_trip, SessionParams};
use ride_core::session::{ActiveTrip, NavTarget, NavigationOutbox, Role, SessionRole};
use ride_core::trip::Trip;

/// Enough for any single interaction plus the decision it may enqueue.
const MAX_STEPS_PER_PUMP: usize = 16;

/// Screen currently presented by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    RolePicker,
    ClientDashboard,
    RideTracking,
    DriverDashboard,
    DriverNavigation,
}

pub struct RideApp {
    pub world: World,
    pub schedule: Schedule,
    pub screen: Screen,
    rng: StdRng,
}

impl RideApp {
    pub fn new() -> Self {
        let mut world = World::new();
        build_session(&mut world, SessionParams::new(Role::Client));
        Self {
            world,
            schedule: interaction_schedule(),
            screen: Screen::RolePicker,
            rng: StdRng::from_entropy(),
        }
    }

    /// Rebuild the session for `role`, with the demo trip already handed in
    /// by the (stubbed) booking flow.
    pub fn start_session(&mut self, role: Role) {
        let mut world = World::new();
        build_session(
            &mut world,
            SessionParams::new(role).with_trip(demo_trip()),
        );
        self.world = world;
        self.screen = ride_screen(role);
        log::info!("session started as {role:?}");
    }

    pub fn role(&self) -> Role {
        self.world.resource::<SessionRole>().0
    }

    pub fn active_trip(&self) -> Option<Trip> {
        self.world.resource::<ActiveTrip>().0.clone()
    }

    pub fn pending_prompt(&self) -> Option<CancelPrompt> {
        self.world.resource::<PendingPrompt>().0.clone()
    }

    /// Queue a user interaction and process it to completion.
    pub fn push_event(&mut self, kind: EventKind) {
        self.world.resource_mut::<InteractionQueue>().push(kind);
        self.pump();
    }

    /// Answer the outstanding cancel prompt; closing the dialog without a
    /// choice routes through here with [CancelChoice::Keep].
    pub fn answer_prompt(&mut self, choice: CancelChoice) {
        if deliver_cancel_choice(&mut self.world, choice) {
            self.pump();
        }
    }

    /// Book a fresh demo trip from the dashboard and open the ride screen.
    pub fn book_demo_trip(&mut self) {
        let trip = random_demo_trip(&mut self.rng);
        let trip_id = trip.id.clone();
        if assign_trip(&mut self.world, trip) {
            log::info!("booked demo trip {trip_id}");
            self.screen = ride_screen(self.role());
        }
    }

    /// Reopen the ride screen for the trip that is already active.
    pub fn show_active_ride(&mut self) {
        if self.active_trip().is_some() {
            self.screen = ride_screen(self.role());
        }
    }

    pub fn back_to_role_picker(&mut self) {
        let mut world = World::new();
        build_session(&mut world, SessionParams::new(self.role()));
        self.world = world;
        self.screen = Screen::RolePicker;
    }

    fn pump(&mut self) {
        run_until_idle(&mut self.world, &mut self.schedule, MAX_STEPS_PER_PUMP);
        let targets = self.world.resource_mut::<NavigationOutbox>().drain();
        for target in targets {
            log::info!("navigating to {target:?}");
            self.screen = home_screen(target);
        }
    }
}

fn ride_screen(role: Role) -> Screen {
    match role {
        Role::Driver => Screen::DriverNavigation,
        Role::Client => Screen::RideTracking,
    }
}

fn home_screen(target: NavTarget) -> Screen {
    match target {
        NavTarget::DriverDashboard => Screen::DriverDashboard,
        NavTarget::ClientDashboard => Screen::ClientDashboard,
    }
}
