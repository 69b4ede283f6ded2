use std::path::Path;

use crate::{
    animation::{
        light::{Gradient, Light},
        particle::ParticleSpawn,
        trajectory::Trajectory,
    },
    foundation::{
        core::{Color, Point},
        error::{FolioError, FolioResult},
    },
};

/// Everything the background animation is built from.
///
/// The defaults reproduce the portfolio hero background; a scene file only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the particle population.
    pub seed: u64,
    pub lights: Vec<Light>,
    pub particles: ParticleSpawn,
    /// Color painted under everything each frame; transparent when unset.
    pub clear: Option<Color>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            lights: default_lights(),
            particles: ParticleSpawn::default(),
            clear: None,
        }
    }
}

/// The two spotlights of the hero background.
pub fn default_lights() -> Vec<Light> {
    vec![
        Light {
            duration_ms: 20_000.0,
            opacity: 0.7,
            gradients: vec![
                Gradient {
                    center: Point::new(0.2, 0.3),
                    radius_px: 400.0,
                    color: Color::rgba(255, 255, 255, 0.3),
                },
                Gradient {
                    center: Point::new(0.8, 0.7),
                    radius_px: 800.0,
                    color: Color::rgba(233, 41, 118, 0.3),
                },
            ],
            trajectory: Trajectory::BREATHING_DRIFT,
        },
        Light {
            duration_ms: 30_000.0,
            opacity: 0.5,
            gradients: vec![
                Gradient {
                    center: Point::new(0.6, 0.5),
                    radius_px: 350.0,
                    color: Color::rgba(255, 255, 255, 0.15),
                },
                Gradient {
                    center: Point::new(0.4, 0.2),
                    radius_px: 350.0,
                    color: Color::rgba(194, 24, 91, 0.15),
                },
            ],
            trajectory: Trajectory::SWELL_DRIFT,
        },
    ]
}

impl SceneConfig {
    pub fn validate(&self) -> FolioResult<()> {
        for (i, light) in self.lights.iter().enumerate() {
            light
                .validate()
                .map_err(|e| FolioError::validation(format!("light {i}: {e}")))?;
        }
        self.particles.validate()
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FolioError::validation(format!("read scene '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
