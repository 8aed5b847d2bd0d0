//! Window and context settings.
//!
//! Every lesson starts from [`WindowConfig::bundled`], the settings embedded
//! from `assets/window.json` (the classic 800x800 "Hello World OpenGL"
//! window), and usually only changes the title.

use glam::Vec4;
use serde::Deserialize;

use crate::error::GfxError;

const WINDOW_JSON: &str = include_str!("assets/window.json");

/// Settings used by [`crate::abs::App::new`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub clear_color: [f32; 4],
    pub vsync: bool,
    /// Draws polygons as outlines.
    pub wireframe: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World OpenGL".to_string(),
            width: 800,
            height: 800,
            gl_version: (3, 3),
            clear_color: [0.2, 0.2, 0.2, 1.0],
            vsync: true,
            wireframe: false,
        }
    }
}

impl WindowConfig {
    /// Parses a (possibly partial) JSON object. Missing keys keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, GfxError> {
        let config: WindowConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The settings compiled into every lesson.
    pub fn bundled() -> Result<Self, GfxError> {
        Self::from_json(WINDOW_JSON)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    /// Checks the values SDL and OpenGL would otherwise reject at runtime.
    pub fn validate(&self) -> Result<(), GfxError> {
        if self.width == 0 || self.height == 0 {
            return Err(GfxError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.gl_version < (3, 3) {
            return Err(GfxError::InvalidConfig(format!(
                "OpenGL {}.{} has no core profile, 3.3 or newer is required",
                self.gl_version.0, self.gl_version.1
            )));
        }
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(GfxError::InvalidConfig(format!(
                "clear color channels must be within [0, 1], got {:?}",
                self.clear_color
            )));
        }
        Ok(())
    }

    pub fn clear_color(&self) -> Vec4 {
        Vec4::from_array(self.clear_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Hello World OpenGL");
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!(config.clear_color(), Vec4::new(0.2, 0.2, 0.2, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bundled_matches_defaults() {
        let config = WindowConfig::bundled().unwrap();
        assert_eq!(config, WindowConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            WindowConfig::from_json(r#"{ "title": "Triangle", "wireframe": true }"#).unwrap();
        assert_eq!(config.title, "Triangle");
        assert!(config.wireframe);
        assert_eq!(config.width, 800);
        assert!(config.vsync);
    }

    #[test]
    fn test_malformed_json() {
        let err = WindowConfig::from_json(r#"{ "width": "wide" }"#).unwrap_err();
        assert!(matches!(err, GfxError::Config(_)));
    }

    #[test]
    fn test_validation() {
        let zero = WindowConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(GfxError::InvalidConfig(_))));

        let err = WindowConfig::from_json(r#"{ "gl_version": [2, 1] }"#).unwrap_err();
        assert!(matches!(err, GfxError::InvalidConfig(_)));

        let bright = WindowConfig {
            clear_color: [1.5, 0.0, 0.0, 1.0],
            ..Default::default()
        };
        assert!(bright.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = WindowConfig::default()
            .with_title("Rectangle")
            .with_wireframe(true);
        assert_eq!(config.title, "Rectangle");
        assert!(config.wireframe);
    }
}
