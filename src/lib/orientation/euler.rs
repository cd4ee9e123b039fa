use core::f64::consts::PI;
use libm::{asin, atan2, fabs};

const RAD_TO_DEG: f64 = 180.0 / PI;

// A quaternion with norm this far below 1 carries no usable rotation
const MIN_NORM_SQUARED: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    // true for inputs that would push NaN through atan2/asin;
    // slight denormalization from upstream fusion is tolerated
    pub fn is_degenerate(&self) -> bool {
        if !(self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite())
        {
            return true;
        }
        self.norm_squared() < MIN_NORM_SQUARED
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EulerAngles {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

// Convert a unit quaternion to raw (unsmoothed) pitch/roll/yaw in degrees.
pub fn quaternion_to_euler(q: Quaternion) -> EulerAngles {
    let ysqr = q.y * q.y;

    let t0 = -2.0 * (ysqr + q.z * q.z) + 1.0;
    let t1 = 2.0 * (q.x * q.y + q.w * q.z);
    let t2 = -2.0 * (q.x * q.z - q.w * q.y);
    let t3 = 2.0 * (q.y * q.z + q.w * q.x);
    let t4 = -2.0 * (q.x * q.x + ysqr) + 1.0;

    // clamp keeps asin total when float overshoot pushes t2 past 1 at the poles
    let t2 = t2.clamp(-1.0, 1.0);

    let mut pitch = atan2(t3, t4) * RAD_TO_DEG;
    // re-center sensor-frame pitch to gravity-relative pitch; the +360 branch
    // keeps the adjusted range continuous across the 180 seam
    if pitch < 0.0 && fabs(pitch) > 90.0 {
        pitch += 360.0;
    }
    pitch -= 90.0;

    let roll = asin(t2) * RAD_TO_DEG;
    let yaw = -atan2(t1, t0) * RAD_TO_DEG;

    EulerAngles { pitch, roll, yaw }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEG_TO_RAD: f64 = PI / 180.0;
    const EPS: f64 = 1e-9;

    fn rot_x(deg: f64) -> Quaternion {
        let half = deg * DEG_TO_RAD / 2.0;
        Quaternion::new(half.cos(), half.sin(), 0.0, 0.0)
    }

    fn rot_y(deg: f64) -> Quaternion {
        let half = deg * DEG_TO_RAD / 2.0;
        Quaternion::new(half.cos(), 0.0, half.sin(), 0.0)
    }

    fn rot_z(deg: f64) -> Quaternion {
        let half = deg * DEG_TO_RAD / 2.0;
        Quaternion::new(half.cos(), 0.0, 0.0, half.sin())
    }

    #[test]
    fn identity_quaternion_constants() {
        let e = quaternion_to_euler(Quaternion::identity());
        assert!((e.pitch - (-90.0)).abs() < EPS);
        assert!(e.roll.abs() < EPS);
        assert!(e.yaw.abs() < EPS);
    }

    #[test]
    fn rotation_about_x_maps_to_pitch() {
        let e = quaternion_to_euler(rot_x(30.0));
        assert!((e.pitch - (-60.0)).abs() < EPS);
        assert!(e.roll.abs() < EPS);
        assert!(e.yaw.abs() < EPS);
    }

    #[test]
    fn pitch_wrap_branch_fires_past_minus_ninety() {
        // raw atan2 pitch of -120 takes the +360 branch: -120 + 360 - 90 = 150
        let e = quaternion_to_euler(rot_x(-120.0));
        assert!((e.pitch - 150.0).abs() < EPS);
    }

    #[test]
    fn rotation_about_y_maps_to_roll() {
        let e = quaternion_to_euler(rot_y(30.0));
        assert!((e.roll - 30.0).abs() < EPS);
        assert!((e.pitch - (-90.0)).abs() < EPS);
        assert!(e.yaw.abs() < EPS);
    }

    #[test]
    fn rotation_about_z_maps_to_negated_yaw() {
        let e = quaternion_to_euler(rot_z(40.0));
        assert!((e.yaw - (-40.0)).abs() < EPS);
        assert!((e.pitch - (-90.0)).abs() < EPS);
        assert!(e.roll.abs() < EPS);
    }

    #[test]
    fn asin_clamp_survives_denormalized_pole() {
        // 90 degree y rotation scaled slightly above unit length pushes t2 past 1
        let q = rot_y(90.0);
        let q = Quaternion::new(q.w * 1.000001, q.x, q.y * 1.000001, q.z);
        let e = quaternion_to_euler(q);
        assert!(e.roll.is_finite());
        assert!((e.roll - 90.0).abs() < 1e-2);
    }

    #[test]
    fn conversion_is_deterministic() {
        let q = Quaternion::new(0.7071, 0.1, -0.2, 0.672);
        assert_eq!(quaternion_to_euler(q), quaternion_to_euler(q));
    }

    #[test]
    fn degenerate_detection() {
        assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0).is_degenerate());
        assert!(Quaternion::new(f64::NAN, 0.0, 0.0, 0.0).is_degenerate());
        assert!(Quaternion::new(f64::INFINITY, 0.0, 0.0, 0.0).is_degenerate());
        assert!(!Quaternion::identity().is_degenerate());
        // upstream fusion output drifts from unit length by float error
        assert!(!Quaternion::new(0.9999, 0.001, 0.0, 0.0).is_degenerate());
    }
}
