//! The public configuration surface, with TOML preset support.
//!
//! A [`Properties`] value holds all user-controlled state in the
//! library. The caller owns its own instance; the controller copies
//! values in and out. Zero-valued fields are swapped for documented
//! defaults at the moment properties are applied, so a zero-initialized
//! struct with only the required fields filled in is a valid starting
//! point. Properties serialize to/from TOML for camera presets.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GimbalError;

/// Interaction mode of the controller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Tumble around a pivot point (a.k.a. trackball or arcball).
    Orbit,
    /// Pan and zoom over a bounded plane, like a slippy map.
    #[default]
    Map,
}

/// Which of the two field-of-view angles is held constant as the
/// viewport aspect changes.
///
/// With a horizontal FOV, shrinking the viewport width changes the
/// height of the frustum but leaves its width intact, and vice versa.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FovOrientation {
    /// Vertical angle fixed.
    #[default]
    Vertical,
    /// Horizontal angle fixed.
    Horizontal,
}

/// Pan and zoom constraint policy for [`Mode::Map`].
///
/// Variants are ordered from least to most restrictive; the controller
/// re-clamps the current pose whenever the policy becomes strictly more
/// restrictive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
    Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// No constraints except the minimum camera-to-plane distance.
    #[default]
    None,
    /// Limits the viewport's extent along the FOV axis so that it
    /// always lies within the map extent. The entire map can be seen at
    /// once, but some portion of it must always be visible.
    Axis,
    /// Limits the viewport's extent into the map extent on both axes.
    /// It may be impossible to see the whole map at once, but none of
    /// the empty void outside the map is ever visible.
    Full,
}

/// All user-controlled state in the library.
///
/// Vector-valued fields are plain arrays so presets stay readable; the
/// controller converts to `glam` types internally. The raycast provider
/// is deliberately not part of this struct - install one with
/// [`CameraController::set_raycast_provider`](crate::CameraController::set_raycast_provider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Camera Properties", inline)]
#[serde(default)]
pub struct Properties {
    /// Interaction mode.
    pub mode: Mode,
    /// Horizontal viewport extent in physical pixels.
    #[schemars(skip)]
    pub viewport_width: u32,
    /// Vertical viewport extent in physical pixels.
    #[schemars(skip)]
    pub viewport_height: u32,
    /// Distance between the camera and the near clipping plane.
    #[schemars(skip)]
    pub near_plane: f32,
    /// Distance between the camera and the far clipping plane.
    #[schemars(skip)]
    pub far_plane: f32,
    /// Which FOV angle is held constant under viewport reshaping.
    pub fov_orientation: FovOrientation,
    /// Full field-of-view angle in degrees (not the half-angle).
    /// Zero selects the default of 33.
    #[schemars(title = "Field of View", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub fov_degrees: f32,
    /// Zoom sensitivity multiplier. Zero selects the default of 0.01.
    #[schemars(title = "Zoom Speed", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub zoom_speed: f32,
    /// World-space point the camera looks at in the home pose.
    pub home_target: [f32; 3],
    /// Unit-length up vector for the home pose. Zero selects the
    /// default of (0, 1, 0).
    pub home_upward: [f32; 3],
    /// Size of the map quad centered at `home_target` (map mode).
    pub map_extent: [f32; 2],
    /// Map plane equation: unit normal XYZ plus offset along the
    /// normal. Zero selects the default of (0, 0, 1, 0).
    pub map_plane: [f32; 4],
    /// Pan/zoom constraint policy (map mode).
    pub map_constraint: Constraint,
    /// Minimum distance between the camera and the map plane,
    /// constraining how far zoom can approach the surface.
    pub map_min_distance: f32,
    /// Vector from `home_target` to the initial eye position
    /// (orbit mode).
    pub home_vector: [f32; 3],
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            viewport_width: 1280,
            viewport_height: 720,
            near_plane: 1.0,
            far_plane: 1000.0,
            fov_orientation: FovOrientation::default(),
            fov_degrees: 33.0,
            zoom_speed: 0.01,
            home_target: [0.0; 3],
            home_upward: [0.0, 1.0, 0.0],
            map_extent: [0.0; 2],
            map_plane: [0.0, 0.0, 1.0, 0.0],
            map_constraint: Constraint::default(),
            map_min_distance: 0.0,
            home_vector: [0.0, 0.0, 1.0],
        }
    }
}

impl Properties {
    /// Replace zero-valued fields with their documented defaults.
    ///
    /// Applied by the controller whenever properties are set, so a
    /// zero-filled struct behaves the same as one built from
    /// [`Properties::default`].
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.fov_degrees == 0.0 {
            self.fov_degrees = 33.0;
        }
        if self.zoom_speed == 0.0 {
            self.zoom_speed = 0.01;
        }
        let up = self.home_upward;
        if up[0] * up[0] + up[1] * up[1] + up[2] * up[2] == 0.0 {
            self.home_upward = [0.0, 1.0, 0.0];
        }
        let pl = self.map_plane;
        if pl[0] * pl[0] + pl[1] * pl[1] + pl[2] * pl[2] + pl[3] * pl[3]
            == 0.0
        {
            self.map_plane = [0.0, 0.0, 1.0, 0.0];
        }
        self
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height as f32
    }

    /// Full field-of-view angle in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Generate JSON Schema describing the UI-exposed properties.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Properties)
    }

    /// Load properties from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GimbalError> {
        let content = std::fs::read_to_string(path).map_err(GimbalError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GimbalError::PropertiesParse(e.to_string()))
    }

    /// Save properties to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GimbalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GimbalError::PropertiesParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GimbalError::Io)?;
        }
        std::fs::write(path, content).map_err(GimbalError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let props = Properties::default();
        let toml_str = toml::to_string_pretty(&props).unwrap();
        let parsed: Properties = toml::from_str(&toml_str).unwrap();
        assert_eq!(props, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
mode = "orbit"
fov_degrees = 45.0
"#;
        let props: Properties = toml::from_str(toml_str).unwrap();
        assert_eq!(props.mode, Mode::Orbit);
        assert_eq!(props.fov_degrees, 45.0);
        // Everything else should be default
        assert_eq!(props.zoom_speed, 0.01);
        assert_eq!(props.home_upward, [0.0, 1.0, 0.0]);
        assert_eq!(props.map_constraint, Constraint::None);
    }

    #[test]
    fn sanitize_fills_zeroed_fields() {
        let props = Properties {
            fov_degrees: 0.0,
            zoom_speed: 0.0,
            home_upward: [0.0; 3],
            map_plane: [0.0; 4],
            ..Properties::default()
        }
        .sanitized();
        assert_eq!(props.fov_degrees, 33.0);
        assert_eq!(props.zoom_speed, 0.01);
        assert_eq!(props.home_upward, [0.0, 1.0, 0.0]);
        assert_eq!(props.map_plane, [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn sanitize_keeps_explicit_values() {
        let props = Properties {
            fov_degrees: 60.0,
            home_upward: [0.0, 0.0, 1.0],
            map_plane: [0.0, 1.0, 0.0, 2.5],
            ..Properties::default()
        }
        .sanitized();
        assert_eq!(props.fov_degrees, 60.0);
        assert_eq!(props.home_upward, [0.0, 0.0, 1.0]);
        assert_eq!(props.map_plane, [0.0, 1.0, 0.0, 2.5]);
    }

    #[test]
    fn constraint_ordering_tracks_restrictiveness() {
        assert!(Constraint::None < Constraint::Axis);
        assert!(Constraint::Axis < Constraint::Full);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Properties::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed fields should be present
        assert!(props.contains_key("mode"));
        assert!(props.contains_key("fov_degrees"));
        assert!(props.contains_key("zoom_speed"));
        assert!(props.contains_key("map_constraint"));

        // Skipped fields should be absent
        assert!(!props.contains_key("viewport_width"));
        assert!(!props.contains_key("near_plane"));
    }
}
