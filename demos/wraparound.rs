// Sweeps yaw through the +/-180 seam to show the smoothed output crossing
// without the 358 degree jump a naive delta would produce.

use orientation_angle::orientation::angle_filter::AngleFilter;
use orientation_angle::orientation::euler::Quaternion;

fn yaw_quat(deg: f64) -> Quaternion {
    let half = (-deg).to_radians() / 2.0;
    Quaternion::new(half.cos(), 0.0, 0.0, half.sin())
}

fn main() {
    let mut filter = AngleFilter::new();
    filter.set_alpha(0.5).unwrap();
    filter.set_update_interval(0).unwrap();

    let mut prev_out: Option<f64> = None;
    for step in 0..40 {
        // 170 up through 180, reappearing from -180
        let target = 170.0 + f64::from(step);
        let target = if target > 180.0 { target - 360.0 } else { target };

        let angles = filter
            .on_sample(yaw_quat(target), f64::from(step) * 10.0)
            .unwrap()
            .unwrap();

        let step_size = prev_out
            .map(|p| {
                let mut d = angles.yaw - p;
                if d > 180.0 {
                    d -= 360.0;
                } else if d <= -180.0 {
                    d += 360.0;
                }
                d
            })
            .unwrap_or(0.0);
        prev_out = Some(angles.yaw);

        println!(
            "target {:8.3}  smoothed {:8.3}  step {:6.3}",
            target, angles.yaw, step_size
        );
        assert!(step_size.abs() < 10.0, "seam produced a spurious jump");
    }
}
