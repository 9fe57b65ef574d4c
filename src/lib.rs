pub mod configuration;
pub mod error;
pub mod simulation;

pub use simulation::states::{unit_vector, Body, BodyRole, NVec3, SimulationState, System, ThrustDirection};
pub use simulation::forces::{GravityField, FORCE_LINKS};
pub use simulation::integrator::{advance_positions, apply_thrust};
pub use simulation::collision::{check_collisions, TerminalEvent};
pub use simulation::clock::MissionClock;
pub use simulation::scenario::Scenario;
pub use simulation::mission::{Command, MissionController, MissionPhase, Telemetry};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use error::{SimError, SimResult};
