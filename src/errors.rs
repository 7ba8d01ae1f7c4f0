use thiserror::Error;

/// Fatal conditions a simulation step can report. All are caller-input
/// errors detected at the point of use; none are retried internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error("scene has no attached bodies")]
    MissingBodies,

    #[error("two bodies occupy the same position; gravity direction is undefined")]
    ZeroDistance,

    #[error("body has zero mass; acceleration is undefined")]
    ZeroMass,
}
