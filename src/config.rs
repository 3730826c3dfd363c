use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tunables for the editor and the 3D wall build.
///
/// Every field has a default, so a config document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing that drawn points snap to.
    pub grid_size_cm: f64,
    /// On-screen radius within which a click snaps onto an existing point.
    pub snap_radius_px: f64,
    /// Distance within which a click selects an opening.
    pub pick_radius_px: f64,
    pub wall_height_cm: f64,
    pub wall_thickness_cm: f64,
    pub frame_thickness_cm: f64,
    pub door_panel_thickness_cm: f64,
    /// Scale applied at the 3D rendering boundary.
    pub cm_to_m: f64,
    pub min_room_size_cm: f64,
    pub max_room_size_cm: f64,
    pub default_room_width_cm: f64,
    pub default_room_height_cm: f64,
    pub view_padding_px: f64,
    pub max_view_scale: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size_cm: 10.0,
            snap_radius_px: 20.0,
            pick_radius_px: 8.0,
            wall_height_cm: 250.0,
            wall_thickness_cm: 10.0,
            frame_thickness_cm: 3.0,
            door_panel_thickness_cm: 4.5,
            cm_to_m: 0.01,
            min_room_size_cm: 100.0,
            max_room_size_cm: 2000.0,
            default_room_width_cm: 400.0,
            default_room_height_cm: 500.0,
            view_padding_px: 40.0,
            max_view_scale: 1.5,
        }
    }
}

impl EditorConfig {
    /// Parses a JSON config document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every length is positive and the room size bounds are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("grid_size_cm", self.grid_size_cm),
            ("snap_radius_px", self.snap_radius_px),
            ("pick_radius_px", self.pick_radius_px),
            ("wall_height_cm", self.wall_height_cm),
            ("wall_thickness_cm", self.wall_thickness_cm),
            ("frame_thickness_cm", self.frame_thickness_cm),
            ("door_panel_thickness_cm", self.door_panel_thickness_cm),
            ("cm_to_m", self.cm_to_m),
            ("min_room_size_cm", self.min_room_size_cm),
            ("max_view_scale", self.max_view_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    value,
                    reason: "must be a positive number",
                }
                .into());
            }
        }
        if self.view_padding_px < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "view_padding_px",
                value: self.view_padding_px,
                reason: "must not be negative",
            }
            .into());
        }
        if self.max_room_size_cm < self.min_room_size_cm {
            return Err(ConfigError::InvalidValue {
                field: "max_room_size_cm",
                value: self.max_room_size_cm,
                reason: "must not be below min_room_size_cm",
            }
            .into());
        }
        let range = self.room_size_range();
        for (field, value) in [
            ("default_room_width_cm", self.default_room_width_cm),
            ("default_room_height_cm", self.default_room_height_cm),
        ] {
            if !range.contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    value,
                    reason: "must lie within the room size bounds",
                }
                .into());
            }
        }
        Ok(())
    }

    /// Allowed room width and height.
    #[must_use]
    pub fn room_size_range(&self) -> RangeInclusive<f64> {
        self.min_room_size_cm..=self.max_room_size_cm
    }
}
