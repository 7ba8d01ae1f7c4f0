pub mod body;
pub mod forces;
pub mod integrator;
pub mod scene;
