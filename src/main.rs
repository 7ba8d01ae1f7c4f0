use sphere_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 7 kg shot launched at 45° into still sea-level air, motion in the
    // XY plane (polar angle fixed at PI/2), gravity along -y.
    let launch_speed = 40.0; // m/s
    let launch_angle: f64 = 45.0; // degrees above horizontal

    let shot = Body::new(
        Vector3D::zero(),
        Vector3D::from_spherical(launch_speed, launch_angle.to_radians(), PI / 2.0),
        7.0,
        0.06,
    );

    let mut scene = Scene::earth_surface();
    scene.attach_bodies(vec![shot]);

    let step_time = 0.001;
    let report_every = 500; // every 0.5 s

    println!(
        "Launching sphere at {:.1} m/s, {:.0}° above horizontal",
        launch_speed, launch_angle
    );

    loop {
        match integrator::run(&mut scene, step_time, report_every) {
            Ok(()) => {
                let body = &scene.bodies()[0];
                println!(
                    "t={:.2}s | x={:.2}m | y={:.2}m | speed={:.2}m/s",
                    scene.elapsed_time,
                    body.position.x,
                    body.position.y,
                    body.velocity.magnitude()
                );

                if body.position.y < 0.0 {
                    println!(
                        "Impact near t={:.2}s at range {:.2}m",
                        scene.elapsed_time, body.position.x
                    );
                    break;
                }
            }
            Err(e) => {
                println!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    Ok(())
}
