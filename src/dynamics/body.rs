use crate::constants::PI;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// A simulated sphere. Cross-section area and volume are derived from the
/// radius and kept consistent through the setters; exactly one of the three
/// geometric quantities is the independent input at any mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub mass: f64,
    pub radius: f64,
    pub cross_section_area: f64,
    pub volume: f64,
}

impl Body {
    /// No validation happens here: a zero or negative mass is accepted and
    /// only rejected later when a step computes acceleration from it.
    pub fn new(position: Vector3D, velocity: Vector3D, mass: f64, radius: f64) -> Self {
        Body {
            position,
            velocity,
            mass,
            radius,
            cross_section_area: PI * radius.powi(2),
            volume: 4.0 / 3.0 * PI * radius.powi(3),
        }
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.cross_section_area = PI * radius.powi(2);
        self.volume = 4.0 / 3.0 * PI * radius.powi(3);
    }

    pub fn set_cross_section_area(&mut self, area: f64) {
        self.set_radius((area / PI).sqrt());
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.set_radius((3.0 * volume / (4.0 * PI)).cbrt());
    }

    pub fn momentum(&self) -> Vector3D {
        self.velocity * self.mass
    }

    /// Advance one time slice under a net force computed by the caller.
    /// Constant-acceleration kinematics over the slice:
    /// `position += velocity·t + 0.5·a·t²`, `velocity += a·t`.
    ///
    /// This function knows nothing about drag or gravity; it only integrates
    /// the force it is handed. Fails with `ZeroMass` before dividing when the
    /// mass is exactly zero, leaving the body untouched.
    pub fn advance(&mut self, net_force: Vector3D, time_slice: f64) -> Result<(), SimulationError> {
        if self.mass == 0.0 {
            return Err(SimulationError::ZeroMass);
        }

        let acceleration = net_force / self.mass;
        self.position =
            self.position + self.velocity * time_slice + acceleration * (0.5 * time_slice.powi(2));
        self.velocity = self.velocity + acceleration * time_slice;

        Ok(())
    }
}
