//! Session setup: wires the resources a role's session needs and hands in
//! trips produced by the (external) booking flow.
//!
//! Booking and matching happen elsewhere; this module only fabricates the
//! demo trips the shell and tests use, always arriving in `requested` state.

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::events::InteractionQueue;
use crate::prompt::PendingPrompt;
use crate::session::{ActiveTrip, NavigationOutbox, Role, SessionRole};
use crate::telemetry::SessionTelemetry;
use crate::trip::{PaymentMethod, Trip, TripStatus};

/// Parameters for building a session.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub role: Role,
    /// Initial trip handed over by the booking flow; `None` starts the
    /// session on the dashboard with nothing active.
    pub trip: Option<Trip>,
}

impl SessionParams {
    pub fn new(role: Role) -> Self {
        Self { role, trip: None }
    }

    pub fn with_trip(mut self, trip: Trip) -> Self {
        self.trip = Some(trip);
        self
    }
}

/// Populates `world` with every resource the lifecycle systems read.
/// Caller must have already created `world`; this only inserts resources.
pub fn build_session(world: &mut World, params: SessionParams) {
    world.insert_resource(SessionRole(params.role));
    world.insert_resource(InteractionQueue::default());
    world.insert_resource(NavigationOutbox::default());
    world.insert_resource(PendingPrompt::default());
    world.insert_resource(SessionTelemetry::default());
    world.insert_resource(ActiveTrip(params.trip));
}

/// Hand a freshly booked trip to the session. Refused (returns `false`)
/// while another trip is active or when the trip already reached a terminal
/// status, so the one-active-trip invariant holds.
pub fn assign_trip(world: &mut World, trip: Trip) -> bool {
    if trip.status.is_terminal() {
        return false;
    }
    let mut active = world.resource_mut::<ActiveTrip>();
    if active.0.is_some() {
        return false;
    }
    active.0 = Some(trip);
    true
}

struct DemoRoute {
    origin: &'static str,
    destination: &'static str,
    distance_km: f64,
    duration_min: u32,
    price_fcfa: u32,
    payment: PaymentMethod,
}

const DEMO_ROUTES: &[DemoRoute] = &[
    DemoRoute {
        origin: "Dakar, Plateau",
        destination: "Saint-Louis, Centre-ville",
        distance_km: 264.0,
        duration_min: 225,
        price_fcfa: 15_000,
        payment: PaymentMethod::Wave,
    },
    DemoRoute {
        origin: "Dakar, Plateau",
        destination: "Aéroport AIBD",
        distance_km: 47.0,
        duration_min: 55,
        price_fcfa: 8_000,
        payment: PaymentMethod::OrangeMoney,
    },
    DemoRoute {
        origin: "Dakar, Médina",
        destination: "Thiès, Grand Standing",
        distance_km: 72.0,
        duration_min: 80,
        price_fcfa: 9_500,
        payment: PaymentMethod::Cash,
    },
    DemoRoute {
        origin: "Dakar, Almadies",
        destination: "Mbour, Saly",
        distance_km: 83.0,
        duration_min: 95,
        price_fcfa: 10_000,
        payment: PaymentMethod::Wave,
    },
];

const DEMO_CLIENTS: &[&str] = &["Amadou Diallo", "Fatou Sow", "Ibrahima Ndour", "Awa Gueye"];

const DEMO_DRIVERS: &[(&str, &str)] = &[
    ("Moussa Ndiaye", "Toyota Corolla • DK-1234-AB"),
    ("Cheikh Fall", "Hyundai Accent • DK-5802-CD"),
    ("Ousmane Ba", "Renault Logan • TH-0417-EF"),
];

/// The Dakar → Saint-Louis intercity trip used across demos and tests.
pub fn demo_trip() -> Trip {
    Trip {
        id: "TG-2847".to_owned(),
        status: TripStatus::Requested,
        origin: "Dakar, Plateau".to_owned(),
        destination: "Saint-Louis, Centre-ville".to_owned(),
        client_name: "Amadou Diallo".to_owned(),
        driver_name: "Moussa Ndiaye".to_owned(),
        driver_rating: 4.8,
        vehicle: "Toyota Corolla • DK-1234-AB".to_owned(),
        price_fcfa: 15_000,
        seats: 2,
        distance_km: 264.0,
        duration_min: 225,
        pickup_eta_min: 5,
        payment: PaymentMethod::Wave,
    }
}

/// Draw a random demo booking; used by the dashboard's booking stub.
pub fn random_demo_trip<R: Rng>(rng: &mut R) -> Trip {
    let route = &DEMO_ROUTES[rng.gen_range(0..DEMO_ROUTES.len())];
    let client = DEMO_CLIENTS[rng.gen_range(0..DEMO_CLIENTS.len())];
    let (driver, vehicle) = DEMO_DRIVERS[rng.gen_range(0..DEMO_DRIVERS.len())];

    Trip {
        id: format!("TG-{}", rng.gen_range(1000..10_000)),
        status: TripStatus::Requested,
        origin: route.origin.to_owned(),
        destination: route.destination.to_owned(),
        client_name: client.to_owned(),
        driver_name: driver.to_owned(),
        driver_rating: rng.gen_range(40..=50) as f32 / 10.0,
        vehicle: vehicle.to_owned(),
        price_fcfa: route.price_fcfa,
        seats: rng.gen_range(1..=4),
        distance_km: route.distance_km,
        duration_min: route.duration_min,
        pickup_eta_min: rng.gen_range(2..=12),
        payment: route.payment,
    }
}

/// Seeded RNG for reproducible demo bookings.
pub fn demo_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
