//! Fixed-step position integration and engine thrust
//!
//! One tick advances velocities first (gravity, then thrust on the
//! vehicle), and only then positions, for every body including the passive
//! ones. The truncation error of this explicit scheme grows with the step
//! size, so large `dt` values (time warp) trade accuracy for simulated
//! speed.

use tracing::debug;

use crate::simulation::states::{unit_vector, BodyRole, SimulationState, System, ThrustDirection};

/// Advance every body by one step: x_n+1 = x_n + v_n+1 * dt
///
/// Velocities must already be at the new time level; runs strictly after
/// the gravity pass and thrust application.
pub fn advance_positions(sys: &mut System, dt: f64) {
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
    }
    sys.t += dt;
}

/// Apply one tick's engine impulse to the vehicle
///
/// The impulse has fixed magnitude `thrust` and is directed along the
/// vehicle's heading: against it for [`ThrustDirection::Forward`] (a
/// retrograde brake) and with it for [`ThrustDirection::Reverse`] (a
/// prograde boost). A vehicle at exactly zero velocity has no heading to
/// burn along; the impulse is skipped for that tick.
pub fn apply_thrust(sys: &mut System, state: &SimulationState, thrust: f64) {
    if !state.engine_on {
        return;
    }

    let vehicle = sys.body_mut(BodyRole::Vehicle);
    let heading = match unit_vector(&vehicle.v) {
        Ok(u) => u,
        Err(_) => {
            debug!("vehicle velocity is zero, skipping thrust impulse");
            return;
        }
    };

    match state.thrust {
        ThrustDirection::Forward => vehicle.v -= thrust * heading,
        ThrustDirection::Reverse => vehicle.v += thrust * heading,
    }
}
