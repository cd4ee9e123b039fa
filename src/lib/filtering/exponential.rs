use num_traits::{Float, NumAssignOps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WrapMode {
    // plain y += alpha * (x - y)
    Linear,
    // shortest signed path on the circle, output kept in (-180, 180]
    Wraparound,
}

// Exponential smoother for one angle channel, in degrees.
// Unseeded until the first update, which passes through unsmoothed.
pub struct ExponentialFilter<ItemT> {
    alpha: ItemT,
    wrap: WrapMode,
    prev: Option<ItemT>,
}
impl<ItemT> ExponentialFilter<ItemT>
where
    ItemT: Float + NumAssignOps,
{
    pub fn new(alpha: ItemT, wrap: WrapMode) -> ExponentialFilter<ItemT> {
        ExponentialFilter {
            alpha,
            wrap,
            prev: None,
        }
    }

    pub fn reset(&mut self) {
        self.prev = None;
    }

    pub fn set_alpha(&mut self, alpha: ItemT) {
        self.alpha = alpha;
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    pub fn seeded(&self) -> bool {
        self.prev.is_some()
    }

    pub fn update(&mut self, raw: ItemT) -> ItemT {
        let smoothed = match self.prev {
            // first sample seeds the filter directly
            None => match self.wrap {
                WrapMode::Linear => raw,
                WrapMode::Wraparound => normalize_angle(raw),
            },
            Some(mut prev) => match self.wrap {
                WrapMode::Linear => {
                    prev += self.alpha * (raw - prev);
                    prev
                }
                WrapMode::Wraparound => {
                    prev += self.alpha * normalize_angle(raw - prev);
                    normalize_angle(prev)
                }
            },
        };
        self.prev = Some(smoothed);
        smoothed
    }
}

// Reduce an angle in degrees to (-180, 180]; -180 maps to 180.
pub fn normalize_angle<ItemT: Float>(mut angle: ItemT) -> ItemT {
    let half_turn = ItemT::from(180.0).unwrap();
    let full_turn = ItemT::from(360.0).unwrap();
    while angle > half_turn {
        angle = angle - full_turn;
    }
    while angle <= -half_turn {
        angle = angle + full_turn;
    }
    angle
}
