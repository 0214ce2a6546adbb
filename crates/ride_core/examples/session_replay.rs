//! Replay a full client journey and print the resulting telemetry.
//!
//! Run with: cargo run -p ride_core --example session_replay

use bevy_ecs::prelude::World;
use ride_core::events::{EventKind, InteractionQueue};
use ride_core::prompt::{deliver_cancel_choice, CancelChoice};
use ride_core::runner::{interaction_schedule, run_until_idle};
use ride_core::scenario::{assign_trip, build_session, demo_rng, demo_trip, random_demo_trip, SessionParams};
use ride_core::session::Role;
use ride_core::telemetry::SessionTelemetry;

fn main() {
    let mut world = World::new();
    build_session(
        &mut world,
        SessionParams::new(Role::Client).with_trip(demo_trip()),
    );
    let mut schedule = interaction_schedule();
    let mut rng = demo_rng(123);

    // First trip: start, then complete.
    world
        .resource_mut::<InteractionQueue>()
        .push(EventKind::StartRide);
    world
        .resource_mut::<InteractionQueue>()
        .push(EventKind::CompleteRide);
    run_until_idle(&mut world, &mut schedule, 16);

    // Second trip: book, then cancel after confirming the prompt.
    assign_trip(&mut world, random_demo_trip(&mut rng));
    world
        .resource_mut::<InteractionQueue>()
        .push(EventKind::CancelRequested);
    run_until_idle(&mut world, &mut schedule, 16);
    deliver_cancel_choice(&mut world, CancelChoice::Confirm);
    run_until_idle(&mut world, &mut schedule, 16);

    let telemetry = world.resource::<SessionTelemetry>();
    println!("--- Session replay (client role, seed 123) ---");
    println!("Rides started:   {}", telemetry.rides_started_total);
    println!("Rides completed: {}", telemetry.rides_completed_total);
    println!("Rides cancelled: {}", telemetry.rides_cancelled_total);
    println!("Prompts shown:   {}", telemetry.cancel_prompts_shown_total);

    println!("\nTerminated trips:");
    for (i, record) in telemetry.records.iter().enumerate() {
        println!(
            "  {}  {} → {}  id={}  status={:?}  started_before_end={}  seq={}",
            i + 1,
            record.trip.origin,
            record.trip.destination,
            record.trip.id,
            record.trip.status,
            record.was_started(),
            record.ended_at_seq,
        );
    }
}
