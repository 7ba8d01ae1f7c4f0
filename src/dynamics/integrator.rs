use crate::dynamics::body::Body;
use crate::dynamics::forces;
use crate::dynamics::scene::Scene;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Run `steps` fixed time slices over the scene.
///
/// Each step recomputes every body's net force (drag + external force +
/// mutual gravity when enabled) from the positions at the start of the
/// step, then advances every body, then moves the scene clock. Forces are
/// buffered so that no body sees another body's partially advanced
/// position within a step.
///
/// Returns the first fatal condition encountered. There is no rollback:
/// steps already completed stay applied, and a step that fails in the
/// advance pass leaves earlier bodies of that step already advanced. The
/// clock only moves on fully successful steps.
pub fn run(scene: &mut Scene, step_time: f64, steps: u32) -> Result<(), SimulationError> {
    let Scene {
        air_density,
        external_acceleration,
        wind,
        mutual_gravity,
        elapsed_time,
        bodies,
    } = scene;

    // Attachment is validated once, before any work, even for zero steps.
    let bodies = bodies.as_deref_mut().ok_or(SimulationError::MissingBodies)?;

    let mut force_buffer = Vec::with_capacity(bodies.len());
    for _ in 0..steps {
        accumulate_forces(
            bodies,
            *air_density,
            *external_acceleration,
            *wind,
            *mutual_gravity,
            &mut force_buffer,
        )?;

        for (body, force) in bodies.iter_mut().zip(force_buffer.iter()) {
            body.advance(*force, step_time)?;
        }

        *elapsed_time += step_time;
    }

    Ok(())
}

/// Advance the scene by a single time slice.
pub fn step(scene: &mut Scene, step_time: f64) -> Result<(), SimulationError> {
    run(scene, step_time, 1)
}

fn accumulate_forces(
    bodies: &[Body],
    air_density: f64,
    external_acceleration: Vector3D,
    wind: Vector3D,
    mutual_gravity: bool,
    force_buffer: &mut Vec<Vector3D>,
) -> Result<(), SimulationError> {
    force_buffer.clear();

    for (index, body) in bodies.iter().enumerate() {
        let mut net_force =
            forces::drag(body, air_density, wind) + forces::external(body, external_acceleration);
        if mutual_gravity {
            net_force = net_force + forces::mutual_gravity(bodies, index)?;
        }
        force_buffer.push(net_force);
    }

    Ok(())
}
