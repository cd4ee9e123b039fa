use crate::error::FilterError;
use crate::filtering::exponential::{ExponentialFilter, WrapMode};
use crate::orientation::euler::{quaternion_to_euler, EulerAngles, Quaternion};

pub const DEFAULT_ALPHA: f64 = 0.8;
pub const DEFAULT_UPDATE_INTERVAL_MS: i32 = 100;

// Throttled quaternion-to-Euler filter for one orientation stream.
//
// Samples arriving faster than the update interval are dropped, not queued.
// Yaw is smoothed along the shortest path on the circle and renormalized into
// (-180, 180]; pitch and roll are smoothed linearly by default, matching the
// sensor module this filter was built for (they stay well inside +/-90 for
// typical device orientations). Call set_wrap_all(true) for uniform
// wraparound-safe smoothing on all three channels.
//
// Not internally synchronized: callers delivering samples from more than one
// thread must serialize access, since throttle bookkeeping and smoothing
// state mutate as a unit.
pub struct AngleFilter {
    alpha: f64,
    update_interval_ms: i32,
    wrap_all: bool,
    last_accepted_ms: Option<f64>,
    pitch: ExponentialFilter<f64>,
    roll: ExponentialFilter<f64>,
    yaw: ExponentialFilter<f64>,
}

impl AngleFilter {
    pub fn new() -> AngleFilter {
        AngleFilter::default()
    }

    // Feed one sensor sample. Ok(None) means the sample was throttled;
    // a rejected or throttled sample mutates no state.
    pub fn on_sample(
        &mut self,
        q: Quaternion,
        timestamp_ms: f64,
    ) -> Result<Option<EulerAngles>, FilterError> {
        if let Some(last) = self.last_accepted_ms {
            if timestamp_ms - last < f64::from(self.update_interval_ms) {
                return Ok(None);
            }
        }
        if q.is_degenerate() {
            return Err(FilterError::InvalidQuaternion);
        }
        self.last_accepted_ms = Some(timestamp_ms);

        let raw = quaternion_to_euler(q);
        Ok(Some(EulerAngles {
            pitch: self.pitch.update(raw.pitch),
            roll: self.roll.update(raw.roll),
            yaw: self.yaw.update(raw.yaw),
        }))
    }

    // true once the first sample has been accepted; all three channels
    // seed together so checking one is enough
    pub fn initialized(&self) -> bool {
        self.pitch.seeded()
    }

    // Restore the unseeded state, including the throttle clock.
    pub fn reset(&mut self) {
        self.pitch.reset();
        self.roll.reset();
        self.yaw.reset();
        self.last_accepted_ms = None;
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), FilterError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(FilterError::InvalidAlpha(alpha));
        }
        self.alpha = alpha;
        self.pitch.set_alpha(alpha);
        self.roll.set_alpha(alpha);
        self.yaw.set_alpha(alpha);
        Ok(())
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    // Takes effect on the next delivered sample.
    pub fn set_update_interval(&mut self, interval_ms: i32) -> Result<(), FilterError> {
        if interval_ms < 0 {
            return Err(FilterError::InvalidInterval(interval_ms));
        }
        self.update_interval_ms = interval_ms;
        Ok(())
    }

    pub fn update_interval(&self) -> i32 {
        self.update_interval_ms
    }

    pub fn set_wrap_all(&mut self, wrap_all: bool) {
        self.wrap_all = wrap_all;
        let mode = if wrap_all {
            WrapMode::Wraparound
        } else {
            WrapMode::Linear
        };
        self.pitch.set_wrap(mode);
        self.roll.set_wrap(mode);
    }

    pub fn wrap_all(&self) -> bool {
        self.wrap_all
    }
}

impl Default for AngleFilter {
    fn default() -> AngleFilter {
        AngleFilter {
            alpha: DEFAULT_ALPHA,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            wrap_all: false,
            last_accepted_ms: None,
            pitch: ExponentialFilter::new(DEFAULT_ALPHA, WrapMode::Linear),
            roll: ExponentialFilter::new(DEFAULT_ALPHA, WrapMode::Linear),
            yaw: ExponentialFilter::new(DEFAULT_ALPHA, WrapMode::Wraparound),
        }
    }
}
