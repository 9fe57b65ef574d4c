//! Core state types for the three-body mission simulation.
//!
//! Defines the runtime structs mutated every tick:
//! - `Body` / `System` using `NVec3` (positions, velocities, masses, radii)
//! - `SimulationState` holding the engine flags and the speed record
//!
//! The system has fixed cardinality: a primary mass, a secondary mass, and
//! the controllable vehicle, indexed by [`BodyRole`].

use nalgebra::Vector3;

use crate::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Unit vector along `v`
/// Fails with [`SimError::DegenerateVector`] when `v` has zero magnitude,
/// instead of silently producing NaN components
pub fn unit_vector(v: &NVec3) -> Result<NVec3, SimError> {
    v.try_normalize(0.0).ok_or(SimError::DegenerateVector)
}

/// Role of a body within the fixed three-body system
/// Doubles as the body's index into [`System::bodies`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Primary,   // dominant mass (the planet)
    Secondary, // orbiting mass (the moon)
    Vehicle,   // controllable rocket
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // collision radius
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: [Body; 3], // indexed by BodyRole
    pub t: f64, // time
}

impl System {
    pub fn body(&self, role: BodyRole) -> &Body {
        &self.bodies[role as usize]
    }

    pub fn body_mut(&mut self, role: BodyRole) -> &mut Body {
        &mut self.bodies[role as usize]
    }
}

/// Propulsion mode of the vehicle's engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustDirection {
    Forward, // burn against the current heading (brake)
    Reverse, // burn along the current heading (boost)
}

impl ThrustDirection {
    pub fn toggled(self) -> Self {
        match self {
            ThrustDirection::Forward => ThrustDirection::Reverse,
            ThrustDirection::Reverse => ThrustDirection::Forward,
        }
    }
}

/// Mutable mission flags and records, updated in response to commands and
/// each tick's physics
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub engine_on: bool, // engine lit this tick?
    pub thrust: ThrustDirection, // propulsion mode
    pub max_speed: f64, // largest vehicle speed observed since reset
}

impl SimulationState {
    /// Initial state: engine off, forward propulsion, no speed record
    pub fn new() -> Self {
        Self {
            engine_on: false,
            thrust: ThrustDirection::Forward,
            max_speed: 0.0,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
