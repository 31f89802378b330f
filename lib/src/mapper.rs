use crate::config::RenderConfig;
use crate::error::Result;
use crate::ramp::bucket_index;
use crate::sample::PixelSample;

/// Maps pixel samples to ramp characters by perceptual brightness.
#[derive(Debug, Clone)]
pub struct LumaMapper {
    config: RenderConfig,
}

impl LumaMapper {
    /// Create a mapper from a validated configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration fails validation.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Select the ramp character for one pixel sample.
    ///
    /// A fully transparent sample (alpha 0) always maps to a space,
    /// whatever its color channels hold. Every other sample goes through
    /// the weighted gray value:
    ///
    /// `gray = 0.2126*R + 0.7152*G + 0.0722*B` (with the default weights)
    ///
    /// which ranges over `[0, 255]` and is bucketed into the ramp. Pure
    /// function of the sample and the owned configuration.
    pub fn char_for(&self, sample: PixelSample) -> char {
        if sample.alpha == 0 {
            return ' ';
        }

        let gray = self.config.red_weight * sample.red as f32
            + self.config.green_weight * sample.green as f32
            + self.config.blue_weight * sample.blue as f32;

        self.config.ramp[bucket_index(gray, self.config.ramp.len())]
    }
}
