use crate::constants::{GRAVITATIONAL_CONSTANT, SPHERE_DRAG_COEFFICIENT};
use crate::dynamics::body::Body;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Quadratic drag against the medium, using the velocity relative to the
/// wind. Zero when the body does not move through the air, the medium is
/// vacuum, or the body is a degenerate point (zero cross-section).
pub fn drag(body: &Body, air_density: f64, wind: Vector3D) -> Vector3D {
    let relative_velocity = body.velocity - wind;
    let speed = relative_velocity.magnitude();

    if speed == 0.0 || air_density == 0.0 || body.cross_section_area == 0.0 {
        return Vector3D::zero();
    }

    let magnitude =
        0.5 * air_density * SPHERE_DRAG_COEFFICIENT * body.cross_section_area * speed.powi(2);

    -relative_velocity.normalize() * magnitude
}

/// Uniform external acceleration expressed as a force so it sums with the
/// other contributions. The mass cancels exactly when the body divides the
/// net force back by its mass.
pub fn external(body: &Body, acceleration: Vector3D) -> Vector3D {
    acceleration * body.mass
}

/// Newtonian attraction exerted on `bodies[index]` by every other body.
/// Recomputed from scratch each step since positions move; iteration order
/// is the body order, so the floating-point summation is deterministic.
///
/// Fails fast with `ZeroDistance` when any pair has coincident centers:
/// the direction is undefined and the magnitude diverges, so the step is
/// not approximated or perturbed.
pub fn mutual_gravity(bodies: &[Body], index: usize) -> Result<Vector3D, SimulationError> {
    let body = &bodies[index];
    let mut total = Vector3D::zero();

    for (other_index, other) in bodies.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let offset = other.position - body.position;
        let distance = offset.magnitude();
        if distance == 0.0 {
            return Err(SimulationError::ZeroDistance);
        }

        let magnitude = GRAVITATIONAL_CONSTANT * body.mass * other.mass / distance.powi(2);
        total = total + offset.normalize() * magnitude;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn sphere_at_rest(mass: f64, radius: f64) -> Body {
        Body::new(Vector3D::zero(), Vector3D::zero(), mass, radius)
    }

    #[test]
    fn test_drag_opposes_relative_velocity() {
        let mut body = sphere_at_rest(1.0, 0.5);
        body.velocity = Vector3D::new(10.0, 0.0, 0.0);

        let force = drag(&body, 1.225, Vector3D::zero());

        let expected = 0.5 * 1.225 * 0.47 * body.cross_section_area * 100.0;
        assert_relative_eq!(force.x, -expected, epsilon = EPSILON);
        assert_relative_eq!(force.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(force.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_tailwind_faster_than_body_pushes_it_forward() {
        let mut body = sphere_at_rest(1.0, 0.5);
        body.velocity = Vector3D::new(5.0, 0.0, 0.0);
        let wind = Vector3D::new(20.0, 0.0, 0.0);

        let force = drag(&body, 1.225, wind);

        assert!(force.x > 0.0, "tailwind should accelerate the body");
        assert_relative_eq!(force.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_is_zero_in_vacuum() {
        let mut body = sphere_at_rest(1.0, 0.5);
        body.velocity = Vector3D::new(100.0, 0.0, 0.0);

        assert_eq!(drag(&body, 0.0, Vector3D::zero()), Vector3D::zero());
    }

    #[test]
    fn test_drag_is_zero_for_point_body() {
        let mut body = sphere_at_rest(1.0, 0.0);
        body.velocity = Vector3D::new(100.0, 0.0, 0.0);

        assert_eq!(drag(&body, 1.225, Vector3D::zero()), Vector3D::zero());
    }

    #[test]
    fn test_drag_is_zero_when_moving_with_the_wind() {
        let mut body = sphere_at_rest(1.0, 0.5);
        body.velocity = Vector3D::new(7.0, -2.0, 1.0);

        assert_eq!(drag(&body, 1.225, body.velocity), Vector3D::zero());
    }

    #[test]
    fn test_external_force_scales_with_mass() {
        let body = sphere_at_rest(3.0, 0.1);
        let acceleration = Vector3D::new(0.0, -9.80665, 0.0);

        let force = external(&body, acceleration);

        assert_relative_eq!(force.y, -29.41995, epsilon = EPSILON);
    }

    #[test]
    fn test_gravity_pair_magnitude_inverse_square() {
        let a = Body::new(Vector3D::zero(), Vector3D::zero(), 1.0e10, 0.1);
        let b = Body::new(Vector3D::new(100.0, 0.0, 0.0), Vector3D::zero(), 2.0e10, 0.1);
        let bodies = [a, b];

        let force = mutual_gravity(&bodies, 0).unwrap();

        let expected = GRAVITATIONAL_CONSTANT * 1.0e10 * 2.0e10 / 10_000.0;
        assert_relative_eq!(force.x, expected, max_relative = EPSILON);
        assert_relative_eq!(force.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_gravity_pair_is_equal_and_opposite() {
        let a = Body::new(Vector3D::new(-1.0, 2.0, 0.5), Vector3D::zero(), 4.0e8, 0.1);
        let b = Body::new(Vector3D::new(3.0, -1.0, 2.0), Vector3D::zero(), 9.0e8, 0.1);
        let bodies = [a, b];

        let on_a = mutual_gravity(&bodies, 0).unwrap();
        let on_b = mutual_gravity(&bodies, 1).unwrap();

        assert_relative_eq!(on_a.x, -on_b.x, max_relative = EPSILON);
        assert_relative_eq!(on_a.y, -on_b.y, max_relative = EPSILON);
        assert_relative_eq!(on_a.z, -on_b.z, max_relative = EPSILON);
    }

    #[test]
    fn test_gravity_coincident_bodies_fail() {
        let position = Vector3D::new(1.0, 1.0, 1.0);
        let a = Body::new(position, Vector3D::zero(), 1.0, 0.1);
        let b = Body::new(position, Vector3D::new(5.0, 0.0, 0.0), 2.0, 0.1);
        let bodies = [a, b];

        assert_eq!(
            mutual_gravity(&bodies, 0),
            Err(SimulationError::ZeroDistance)
        );
    }

    #[test]
    fn test_gravity_single_body_is_zero() {
        let bodies = [sphere_at_rest(5.0, 0.1)];
        assert_eq!(mutual_gravity(&bodies, 0), Ok(Vector3D::zero()));
    }
}
