//! Mission controller: per-tick orchestration and the pause state machine
//!
//! One tick runs gravity over the fixed pair links, applies thrust when the
//! engine is lit, advances positions, updates the clock and the speed
//! record, and finally checks proximity. A terminal event parks the
//! controller in a paused phase: further ticks keep returning telemetry but
//! run no physics until an explicit reset restores the initial snapshot.
//!
//! Commands arrive asynchronously from the front-end collaborator but are
//! queued and drained only at the start of a tick, so body state is never
//! mutated mid-integration.

use std::fmt;

use tracing::{debug, info};

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::clock::MissionClock;
use crate::simulation::collision::{check_collisions, TerminalEvent};
use crate::simulation::forces::GravityField;
use crate::simulation::integrator::{advance_positions, apply_thrust};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyRole, NVec3, SimulationState, System};

/// External commands accepted from the front-end collaborator
/// Each is applied atomically at the next tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleEngine,
    ToggleThrustDirection,
    ToggleTimeWarp,
    Reset,
}

/// Controller phase
/// Terminal events park the mission in a paused phase; only reset leaves it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    Running,
    PausedComplete,
    PausedCollision,
}

/// Per-tick snapshot handed to the front-end
#[derive(Debug, Clone)]
pub struct Telemetry {
    pub elapsed_seconds: f64,
    pub elapsed_minutes: u64,
    pub elapsed_days: u64,
    pub current_speed: f64, // vehicle speed [m/s]
    pub max_speed: f64, // largest vehicle speed since reset [m/s]
    pub body_positions: [NVec3; 3], // role order: primary, secondary, vehicle
    pub body_velocities: [NVec3; 3],
    pub terminal: Option<TerminalEvent>,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mission time {:.0}s / {}m / {}d, |v| = {:.0} m/s, |v|max = {:.0} m/s",
            self.elapsed_seconds,
            self.elapsed_minutes,
            self.elapsed_days,
            self.current_speed,
            self.max_speed,
        )
    }
}

/// Owns all mutable simulation state and drives one tick at a time
///
/// The tick cadence is the caller's business: a real-time front-end, a test
/// harness, and a batch driver all call [`MissionController::tick`] at
/// whatever rate suits them, and each tick advances simulated time by the
/// clock's current `dt` regardless.
pub struct MissionController {
    system: System,
    initial: System, // snapshot restored on reset
    state: SimulationState,
    clock: MissionClock,
    gravity: GravityField,
    parameters: Parameters,
    phase: MissionPhase,
    queue: Vec<Command>,
}

impl MissionController {
    pub fn new(scenario: Scenario) -> Self {
        let initial = scenario.system.clone();
        let clock = MissionClock::new(scenario.parameters.dt, scenario.parameters.dt_warp);
        Self {
            system: scenario.system,
            initial,
            state: SimulationState::new(),
            clock,
            gravity: scenario.gravity,
            parameters: scenario.parameters,
            phase: MissionPhase::Running,
            queue: Vec::new(),
        }
    }

    pub fn build(cfg: ScenarioConfig) -> Self {
        Self::new(Scenario::build_scenario(cfg))
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == MissionPhase::Running
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn clock(&self) -> &MissionClock {
        &self.clock
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Queue a command for the next tick boundary
    pub fn submit(&mut self, cmd: Command) {
        self.queue.push(cmd);
    }

    pub fn toggle_engine(&mut self) {
        self.submit(Command::ToggleEngine);
    }

    pub fn toggle_thrust_direction(&mut self) {
        self.submit(Command::ToggleThrustDirection);
    }

    pub fn toggle_time_warp(&mut self) {
        self.submit(Command::ToggleTimeWarp);
    }

    pub fn reset(&mut self) {
        self.submit(Command::Reset);
    }

    /// Run one tick and return the resulting telemetry
    ///
    /// Order within the tick: drain queued commands, then (while running)
    /// gravity over all three links in fixed order, thrust if the engine is
    /// on, position advance for all three bodies, clock and speed-record
    /// update, collision check. While paused the physics block is skipped
    /// entirely; telemetry keeps reporting the terminal event until reset.
    pub fn tick(&mut self) -> SimResult<Telemetry> {
        self.drain_commands();

        if self.phase != MissionPhase::Running {
            return Ok(self.telemetry());
        }

        let dt = self.clock.dt();

        self.gravity.apply(&mut self.system, dt)?;
        apply_thrust(&mut self.system, &self.state, self.parameters.thrust);
        advance_positions(&mut self.system, dt);
        self.clock.advance();

        let speed = self.system.body(BodyRole::Vehicle).v.norm();
        if speed > self.state.max_speed {
            self.state.max_speed = speed;
        }

        if let Some(event) = check_collisions(&self.system) {
            self.phase = match event {
                TerminalEvent::MissionComplete => MissionPhase::PausedComplete,
                TerminalEvent::Collision => MissionPhase::PausedCollision,
            };
            info!(
                ?event,
                elapsed = self.clock.elapsed_seconds(),
                "terminal event, mission paused until reset"
            );
        }

        Ok(self.telemetry())
    }

    /// Apply queued commands in submission order
    /// While paused, everything except reset is meaningless and dropped
    fn drain_commands(&mut self) {
        for cmd in std::mem::take(&mut self.queue) {
            match cmd {
                Command::Reset => self.apply_reset(),
                _ if self.phase != MissionPhase::Running => {
                    debug!(?cmd, "ignoring command while paused");
                }
                Command::ToggleEngine => {
                    self.state.engine_on = !self.state.engine_on;
                    info!(engine_on = self.state.engine_on, "engine toggled");
                }
                Command::ToggleThrustDirection => {
                    self.state.thrust = self.state.thrust.toggled();
                    info!(mode = ?self.state.thrust, "propulsion mode toggled");
                }
                Command::ToggleTimeWarp => {
                    self.clock.toggle_warp();
                    info!(warp = self.clock.warp(), dt = self.clock.dt(), "time warp toggled");
                }
            }
        }
    }

    /// Restore the initial snapshot: bodies, flags, clock, and speed record
    fn apply_reset(&mut self) {
        self.system = self.initial.clone();
        self.state = SimulationState::new();
        self.clock.reset();
        self.phase = MissionPhase::Running;
        info!("mission reset to initial conditions");
    }

    fn telemetry(&self) -> Telemetry {
        let positions = [
            self.system.body(BodyRole::Primary).x,
            self.system.body(BodyRole::Secondary).x,
            self.system.body(BodyRole::Vehicle).x,
        ];
        let velocities = [
            self.system.body(BodyRole::Primary).v,
            self.system.body(BodyRole::Secondary).v,
            self.system.body(BodyRole::Vehicle).v,
        ];
        let terminal = match self.phase {
            MissionPhase::Running => None,
            MissionPhase::PausedComplete => Some(TerminalEvent::MissionComplete),
            MissionPhase::PausedCollision => Some(TerminalEvent::Collision),
        };

        Telemetry {
            elapsed_seconds: self.clock.elapsed_seconds(),
            elapsed_minutes: self.clock.elapsed_minutes(),
            elapsed_days: self.clock.elapsed_days(),
            current_speed: self.system.body(BodyRole::Vehicle).v.norm(),
            max_speed: self.state.max_speed,
            body_positions: positions,
            body_velocities: velocities,
            terminal,
        }
    }
}
