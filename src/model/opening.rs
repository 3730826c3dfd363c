use serde::{Deserialize, Serialize};

use crate::topology::WallRef;

slotmap::new_key_type! {
    /// Unique identifier for a wall opening in the room store.
    pub struct OpeningId;
}

/// The kinds of openings that can be cut into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpeningKind {
    Window,
    WindowTall,
    Door,
    BalconyDoor,
}

/// Fixed size of an opening kind, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningDimensions {
    pub width: f64,
    pub height: f64,
    /// Height of the opening's bottom edge above the floor.
    pub sill: f64,
}

impl OpeningKind {
    #[must_use]
    pub fn dimensions(self) -> OpeningDimensions {
        match self {
            Self::Window => OpeningDimensions {
                width: 120.0,
                height: 120.0,
                sill: 80.0,
            },
            Self::WindowTall => OpeningDimensions {
                width: 110.0,
                height: 200.0,
                sill: 30.0,
            },
            Self::Door => OpeningDimensions {
                width: 90.0,
                height: 210.0,
                sill: 0.0,
            },
            Self::BalconyDoor => OpeningDimensions {
                width: 100.0,
                height: 250.0,
                sill: 0.0,
            },
        }
    }

    #[must_use]
    pub fn half_width(self) -> f64 {
        self.dimensions().width / 2.0
    }

    /// Returns `true` for the hinged door, the only kind with a swinging
    /// panel instead of a glass pane.
    #[must_use]
    pub fn is_door(self) -> bool {
        self == Self::Door
    }
}

/// A window or door cut into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallOpening {
    pub kind: OpeningKind,
    /// The wall this opening belongs to.
    pub wall: WallRef,
    /// Distance in cm from the wall's start to the opening's center.
    pub position: f64,
    /// Door swing state; ignored for other kinds.
    #[serde(default)]
    pub is_open: bool,
}

impl WallOpening {
    #[must_use]
    pub fn new(kind: OpeningKind, wall: WallRef, position: f64) -> Self {
        Self {
            kind,
            wall,
            position,
            is_open: false,
        }
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.kind.half_width()
    }

    /// Door panel rotation around its hinge: `0` closed, `-π/2` open.
    #[must_use]
    pub fn swing_angle(&self) -> f64 {
        if self.kind.is_door() && self.is_open {
            -std::f64::consts::FRAC_PI_2
        } else {
            0.0
        }
    }
}
