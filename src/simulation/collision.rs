//! Proximity detection between the vehicle and the massive bodies
//!
//! Runs after position integration each tick. Contact is a squared-distance
//! comparison against the combined radii, so no square root is taken.

use crate::simulation::states::{BodyRole, System};

/// Terminal proximity outcomes for the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Vehicle reached the primary body
    MissionComplete,
    /// Vehicle struck the secondary body
    Collision,
}

/// Check the vehicle against both massive bodies
///
/// Contact means |x_a - x_b|^2 <= (radius_a + radius_b)^2, boundary
/// inclusive. The primary is tested first; a tick that somehow contacts
/// both reports the primary outcome.
pub fn check_collisions(sys: &System) -> Option<TerminalEvent> {
    if in_contact(sys, BodyRole::Vehicle, BodyRole::Primary) {
        return Some(TerminalEvent::MissionComplete);
    }
    if in_contact(sys, BodyRole::Vehicle, BodyRole::Secondary) {
        return Some(TerminalEvent::Collision);
    }
    None
}

fn in_contact(sys: &System, a: BodyRole, b: BodyRole) -> bool {
    let ba = sys.body(a);
    let bb = sys.body(b);
    let reach = ba.radius + bb.radius;
    (ba.x - bb.x).norm_squared() <= reach * reach
}
