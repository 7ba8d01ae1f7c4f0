pub use std::f64::consts::PI;

// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // N⋅m²/kg²
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²

// Environmental Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Aerodynamic Constants
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47; // dimensionless, smooth sphere
