use crate::constants::{AIR_DENSITY_SEA_LEVEL, STANDARD_GRAVITY};
use crate::dynamics::body::Body;
use crate::utils::vector3d::Vector3D;

/// Shared environment parameters plus the body collection and the running
/// clock. The scene computes no dynamics itself; the integrator reads its
/// parameters and mutates its bodies.
///
/// `bodies` is `None` until a collection is attached. Running the integrator
/// against a detached scene fails with `MissingBodies` instead of doing
/// partial work.
#[derive(Debug, Clone)]
pub struct Scene {
    pub air_density: f64,
    pub external_acceleration: Vector3D,
    pub wind: Vector3D,
    pub mutual_gravity: bool,
    pub elapsed_time: f64,
    pub bodies: Option<Vec<Body>>,
}

impl Scene {
    pub fn new(air_density: f64, external_acceleration: Vector3D, wind: Vector3D) -> Self {
        Scene {
            air_density,
            external_acceleration,
            wind,
            mutual_gravity: false,
            elapsed_time: 0.0,
            bodies: None,
        }
    }

    /// Sea-level air, standard gravity along -y, calm air.
    pub fn earth_surface() -> Self {
        Scene::new(
            AIR_DENSITY_SEA_LEVEL,
            Vector3D::new(0.0, -STANDARD_GRAVITY, 0.0),
            Vector3D::zero(),
        )
    }

    /// No medium and no external acceleration; drag is disabled entirely.
    pub fn vacuum() -> Self {
        Scene::new(0.0, Vector3D::zero(), Vector3D::zero())
    }

    pub fn attach_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = Some(bodies);
    }

    pub fn take_bodies(&mut self) -> Option<Vec<Body>> {
        self.bodies.take()
    }

    /// Attached bodies, or an empty slice when detached.
    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_deref().unwrap_or(&[])
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        self.bodies.as_deref_mut().unwrap_or(&mut [])
    }
}
