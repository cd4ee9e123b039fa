use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterError {
    // smoothing coefficient must stay in (0, 1]
    #[error("smoothing alpha out of range (0, 1]: {0}")]
    InvalidAlpha(f64),
    #[error("negative update interval: {0} ms")]
    InvalidInterval(i32),
    // non-finite components or near-zero norm would push NaN through atan2/asin
    #[error("quaternion has non-finite components or near-zero norm")]
    InvalidQuaternion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_bad_value() {
        assert!(FilterError::InvalidAlpha(1.5).to_string().contains("1.5"));
        assert!(FilterError::InvalidInterval(-20).to_string().contains("-20"));
        assert!(FilterError::InvalidQuaternion
            .to_string()
            .contains("quaternion"));
    }
}
