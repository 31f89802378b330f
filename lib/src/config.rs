use crate::error::{Error, Result};
use crate::ramp::DENSITY_RAMP;

/// Configuration for the luminance-to-character mapping
///
/// The ramp and luma weights are fixed for the lifetime of a conversion:
/// they are owned by this struct and handed to the mapper once, so no call
/// can observe different constants than the previous one.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Character ramp, densest glyph first, sparsest last
    pub ramp: Vec<char>,

    /// Luma weights applied to the raw 0-255 channel values
    pub red_weight: f32,   // default 0.2126
    pub green_weight: f32, // default 0.7152
    pub blue_weight: f32,  // default 0.0722
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: DENSITY_RAMP.chars().collect(),

            // BT.709 luma coefficients
            red_weight: 0.2126,
            green_weight: 0.7152,
            blue_weight: 0.0722,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.ramp.is_empty() {
            return Err(Error::Config {
                message: "ramp must contain at least one character".to_string(),
            });
        }
        for (name, weight) in [
            ("red_weight", self.red_weight),
            ("green_weight", self.green_weight),
            ("blue_weight", self.blue_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Config {
                    message: format!("{} must be finite and non-negative, got {}", name, weight),
                });
            }
        }
        Ok(())
    }
}
