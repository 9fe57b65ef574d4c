//! Configuration types for loading mission scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! mission scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for one body
//! - [`ScenarioConfig`]   – top-level wrapper with the three named bodies
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 2000000.0      # simulated seconds before a driver gives up
//!   dt: 10.0              # step size [s]
//!   dt_warp: 1000.0       # step size while warping [s]
//!   freq: 1000.0          # suggested tick rate [Hz]
//!   thrust: 0.4           # engine impulse per tick [m/s]
//!   G: 6.67e-11           # gravitational constant
//!
//! primary:
//!   x: [ 0.0, 0.0, 0.0 ]
//!   v: [ 0.0, 0.0, 0.0 ]
//!   m: 5.97e24
//!   radius: 6.37e6
//!
//! secondary:
//!   x: [ 3.84e8, 0.0, 0.0 ]
//!   v: [ 0.0, 0.0, -1022.0 ]
//!   m: 7.35e22
//!   radius: 1.74e6
//!
//! vehicle:
//!   x: [ 3.4909091e8, 0.0, 0.0 ]
//!   v: [ 0.0, 0.0, -1395.0 ]
//!   m: 4500.0
//!   radius: 8.7e6
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; scenario variants are expressed as distinct preset files
//! under `scenarios/`, never as copies of the physics.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,   // time end
    pub dt: f64,      // step size
    pub dt_warp: f64, // step size while warping
    pub freq: f64,    // suggested tick rate, a hint only
    pub thrust: f64,  // per-tick engine impulse magnitude
    pub G: f64,       // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
    pub radius: f64, // Collision radius of the body
}

/// Top-level scenario configuration loaded from YAML.
/// The three bodies are named by role rather than listed, since the system
/// always consists of exactly a primary, a secondary, and the vehicle.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub primary: BodyConfig,   // Dominant mass, e.g. the planet
    pub secondary: BodyConfig, // Orbiting mass, e.g. the moon
    pub vehicle: BodyConfig,   // Controllable rocket
}
