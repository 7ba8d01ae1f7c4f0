pub mod constants;
pub mod dynamics;
pub mod errors;
pub mod utils;

pub use constants::*;
pub use dynamics::body::Body;
pub use dynamics::forces;
pub use dynamics::integrator;
pub use dynamics::scene::Scene;
pub use errors::SimulationError;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
