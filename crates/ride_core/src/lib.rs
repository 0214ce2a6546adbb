pub mod events;
pub mod trip;
pub mod session;
pub mod prompt;
pub mod telemetry;
pub mod scenario;
pub mod systems;
pub mod runner;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
