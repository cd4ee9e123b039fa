// Feeds a noisy synthetic yaw sweep through the filter at sensor cadence
// and prints raw vs smoothed output at the throttled rate.

use orientation_angle::orientation::angle_filter::AngleFilter;
use orientation_angle::orientation::euler::{quaternion_to_euler, Quaternion};

// quaternion whose converted yaw equals `deg` (rotation about z by -deg)
fn yaw_quat(deg: f64) -> Quaternion {
    let half = (-deg).to_radians() / 2.0;
    Quaternion::new(half.cos(), 0.0, 0.0, half.sin())
}

fn main() {
    let mut filter = AngleFilter::new();
    filter.set_alpha(0.3).unwrap();
    filter.set_update_interval(100).unwrap();

    // sensor delivers every 20 ms; the filter emits at most every 100 ms
    let mut t_ms = 0.0;
    for step in 0..200 {
        let slow_sweep = f64::from(step) * 0.5;
        let jitter = (f64::from(step) * 1.7).sin() * 8.0;
        let q = yaw_quat(slow_sweep + jitter);

        if let Some(angles) = filter.on_sample(q, t_ms).unwrap() {
            let raw = quaternion_to_euler(q);
            println!(
                "t={:5.0} ms  raw yaw {:8.3}  smoothed yaw {:8.3}",
                t_ms, raw.yaw, angles.yaw
            );
        }
        t_ms += 20.0;
    }
}
