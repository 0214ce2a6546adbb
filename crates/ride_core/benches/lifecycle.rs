//! Lifecycle benchmarks for ride_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bevy_ecs::prelude::World;
use ride_core::events::{EventKind, InteractionQueue};
use ride_core::prompt::{deliver_cancel_choice, CancelChoice};
use ride_core::runner::{interaction_schedule, run_until_idle};
use ride_core::scenario::{build_session, demo_trip, SessionParams};
use ride_core::session::Role;
use ride_core::telemetry::SessionTelemetry;

fn bench_cancel_journey(c: &mut Criterion) {
    c.bench_function("start_then_cancel_journey", |b| {
        b.iter(|| {
            let mut world = World::new();
            build_session(
                &mut world,
                SessionParams::new(Role::Client).with_trip(demo_trip()),
            );
            let mut schedule = interaction_schedule();

            {
                let mut queue = world.resource_mut::<InteractionQueue>();
                queue.push(EventKind::StartRide);
                queue.push(EventKind::CancelRequested);
            }
            run_until_idle(&mut world, &mut schedule, 16);
            deliver_cancel_choice(&mut world, CancelChoice::Confirm);
            run_until_idle(&mut world, &mut schedule, 16);

            black_box(world.resource::<SessionTelemetry>().rides_cancelled_total);
        });
    });
}

fn bench_noop_dispatch(c: &mut Criterion) {
    c.bench_function("noop_events_on_empty_session", |b| {
        b.iter(|| {
            let mut world = World::new();
            build_session(&mut world, SessionParams::new(Role::Driver));
            let mut schedule = interaction_schedule();

            {
                let mut queue = world.resource_mut::<InteractionQueue>();
                for _ in 0..32 {
                    queue.push(EventKind::StartRide);
                    queue.push(EventKind::CompleteRide);
                    queue.push(EventKind::CancelRequested);
                }
            }
            black_box(run_until_idle(&mut world, &mut schedule, 128));
        });
    });
}

criterion_group!(benches, bench_cancel_journey, bench_noop_dispatch);
criterion_main!(benches);
