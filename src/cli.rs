//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RenderConfig, ShipPhysics};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "buoyant")]
#[command(about = "A ship steering across animated waves", long_about = None)]
pub struct Args {
    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Longest frame step fed to the physics (seconds)
    #[arg(long, value_name = "SECONDS", value_parser = parse_max_dt)]
    pub max_dt: Option<f32>,

    /// Run the simulation without a window for this many 60 Hz frames
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

/// Accept only finite, positive step limits
fn parse_max_dt(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("must be a finite number of seconds above 0, got {}", s))
    }
}

impl Args {
    /// Rendering configuration with command-line overrides applied
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        config
    }

    /// Ship physics with command-line overrides applied
    pub fn ship_physics(&self) -> ShipPhysics {
        let mut physics = ShipPhysics::default();
        if let Some(max_dt) = self.max_dt {
            physics.max_frame_dt_s = max_dt;
        }
        physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["buoyant"]);
        assert_eq!(args.render_config().window_width, 800);
        assert_eq!(args.render_config().window_height, 600);
        assert_eq!(args.ship_physics().max_frame_dt_s, 0.1);
        assert!(args.headless.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "buoyant",
            "--width",
            "1280",
            "--height",
            "720",
            "--max-dt",
            "0.05",
            "--headless",
            "300",
        ]);
        assert_eq!(args.render_config().window_width, 1280);
        assert_eq!(args.render_config().window_height, 720);
        assert_eq!(args.ship_physics().max_frame_dt_s, 0.05);
        assert_eq!(args.headless, Some(300));
    }

    #[test]
    fn test_max_dt_rejects_non_positive_and_non_finite() {
        for bad in ["-1", "0", "NaN", "inf", "abc"] {
            assert!(
                Args::try_parse_from(["buoyant", "--max-dt", bad]).is_err(),
                "--max-dt {} should be rejected",
                bad
            );
        }
    }
}
