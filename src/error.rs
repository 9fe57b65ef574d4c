//! Error types for the simulation core

use thiserror::Error;

use crate::simulation::states::BodyRole;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the physics core
///
/// Both variants are numerical degeneracies: contract violations in a
/// correctly configured scenario. Callers treat them as fatal rather than
/// recoverable, since continuing past one would produce physically
/// meaningless trajectories. External commands never produce errors; a
/// command that is not meaningful in the current phase is a no-op.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,

    #[error("bodies {0:?} and {1:?} coincide, gravitational force is undefined")]
    CoincidentBodies(BodyRole, BodyRole),
}
