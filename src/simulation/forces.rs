//! Pairwise gravitational force accumulation
//!
//! `GravityField` evaluates Newtonian gravity between every pair of bodies
//! in the three-body system and folds the resulting impulse into each
//! body's velocity. All forces are computed from the positions at the start
//! of the tick, before any position update; that ordering fixes the
//! stability profile of the explicit stepper and must not be reordered.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{BodyRole, System};

/// Unordered body pairs for which mutual gravity is computed, evaluated
/// exactly once per tick in this order. The set is the complete graph over
/// the three bodies. Gravity is additive, so the order has no mathematical
/// effect, but keeping it fixed makes trajectories reproducible
/// bit-for-bit.
pub const FORCE_LINKS: [(BodyRole, BodyRole); 3] = [
    (BodyRole::Primary, BodyRole::Secondary),
    (BodyRole::Primary, BodyRole::Vehicle),
    (BodyRole::Secondary, BodyRole::Vehicle),
];

/// Newtonian gravity over the complete pair graph
#[derive(Debug, Clone)]
pub struct GravityField {
    pub G: f64, // gravitational constant
}

impl GravityField {
    /// Accumulate one tick's gravitational impulses into body velocities
    ///
    /// Iterates [`FORCE_LINKS`] in order, applying [`Self::apply_pair`] to
    /// each. Positions are left untouched.
    pub fn apply(&self, sys: &mut System, dt: f64) -> SimResult<()> {
        for (a, b) in FORCE_LINKS {
            self.apply_pair(sys, a, b, dt)?;
        }
        Ok(())
    }

    /// Mutual velocity kick for a single pair
    ///
    /// F = G * m_a * m_b / r^2 along the separation unit vector, and each
    /// body picks up dv = -+ (F / m) * dt with opposite signs per Newton's
    /// third law. Coincident bodies (r^2 = 0) make the force undefined and
    /// fail with [`SimError::CoincidentBodies`]; there is no softening
    /// floor, initial conditions are expected to keep bodies separated.
    pub fn apply_pair(&self, sys: &mut System, ra: BodyRole, rb: BodyRole, dt: f64) -> SimResult<()> {
        let (xa, ma) = {
            let a = sys.body(ra);
            (a.x, a.m)
        };
        let (xb, mb) = {
            let b = sys.body(rb);
            (b.x, b.m)
        };

        // r points from b toward a; a is pulled along -r, b along +r
        let r = xa - xb;

        // Squared separation |r|^2; compared against zero before any sqrt
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            return Err(SimError::CoincidentBodies(ra, rb));
        }

        // F_vec = G m_a m_b r_hat / r^2 = G m_a m_b r / |r|^3
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        let f = self.G * ma * mb * inv_r3 * r;

        // Equal and opposite impulses, scaled by each body's own mass
        sys.body_mut(ra).v -= (f / ma) * dt;
        sys.body_mut(rb).v += (f / mb) * dt;

        Ok(())
    }
}
