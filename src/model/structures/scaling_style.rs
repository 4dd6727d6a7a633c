use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Normalization curve applied to a board's raw scores before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingStyle {
    #[default]
    Linear,
    /// Compresses high outliers.
    Log,
    /// Depresses low and mid scores relative to linear.
    Power,
    /// Compresses the top, then separates the middle and low band.
    LogPower
}

#[cfg(test)]
mod tests {
    use crate::model::structures::scaling_style::ScalingStyle;

    #[test]
    fn test_default_is_linear() {
        assert_eq!(ScalingStyle::default(), ScalingStyle::Linear);
    }

    #[test]
    fn test_deserialize_names() {
        assert_eq!(
            serde_json::from_str::<ScalingStyle>("\"linear\"").unwrap(),
            ScalingStyle::Linear
        );
        assert_eq!(serde_json::from_str::<ScalingStyle>("\"log\"").unwrap(), ScalingStyle::Log);
        assert_eq!(
            serde_json::from_str::<ScalingStyle>("\"power\"").unwrap(),
            ScalingStyle::Power
        );
        assert_eq!(
            serde_json::from_str::<ScalingStyle>("\"log-power\"").unwrap(),
            ScalingStyle::LogPower
        );
    }

    #[test]
    fn test_deserialize_unknown_name() {
        assert!(serde_json::from_str::<ScalingStyle>("\"cubic\"").is_err());
    }
}
