use crate::config::EditorConfig;
use crate::math::{Point2, Vector2, GEOMETRY_EPSILON};
use crate::model::{OpeningId, WallOpening};

/// Wall dimensions used by the 3D build, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallParams {
    pub height: f64,
    pub thickness: f64,
    /// Width of the frame strips around an opening.
    pub frame: f64,
    pub door_thickness: f64,
}

impl Default for WallParams {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for WallParams {
    fn from(config: &EditorConfig) -> Self {
        Self {
            height: config.wall_height_cm,
            thickness: config.wall_thickness_cm,
            frame: config.frame_thickness_cm,
            door_thickness: config.door_panel_thickness_cm,
        }
    }
}

/// Edge of an opening a frame strip runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// What a wall piece is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Full-height wall between openings.
    Solid,
    /// Wall above an opening.
    Lintel,
    /// Wall below a window.
    Sill,
    /// Translucent pane filling a window or balcony door.
    Glass,
    Frame(FrameEdge),
}

impl PieceKind {
    /// Returns `true` for the wall body itself (solid, lintel, sill).
    #[must_use]
    pub fn is_masonry(self) -> bool {
        matches!(self, Self::Solid | Self::Lintel | Self::Sill)
    }
}

/// An axis-aligned box in wall-local space.
///
/// `x` runs along the wall from `-length/2` to `+length/2`, `y` is height
/// above the floor, depth is across the wall and centered on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPiece {
    pub kind: PieceKind,
    pub center: Point2,
    /// Width along the wall and height.
    pub size: Vector2,
    pub depth: f64,
}

impl WallPiece {
    fn new(kind: PieceKind, center: Point2, size: Vector2, depth: f64) -> Self {
        Self {
            kind,
            center,
            size,
            depth,
        }
    }

    /// Lower bound along the wall.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.x - self.size.x / 2.0
    }

    /// Upper bound along the wall.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.center.x + self.size.x / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.size.y / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center.y + self.size.y / 2.0
    }

    /// Scales the piece into meters by the configured `cm_to_m` factor.
    #[must_use]
    pub fn to_meters(&self, config: &EditorConfig) -> Self {
        let cm_to_m = config.cm_to_m;
        Self {
            kind: self.kind,
            center: self.center * cm_to_m,
            size: self.size * cm_to_m,
            depth: self.depth * cm_to_m,
        }
    }
}

/// A hinged door leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorPanel {
    pub opening: OpeningId,
    /// Wall-local x of the hinge edge; the panel extends toward +x when closed.
    pub hinge_x: f64,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    /// Rotation about the hinge: `0` closed, `-π/2` open.
    pub swing_angle: f64,
}

/// Everything one wall produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallBuild {
    pub pieces: Vec<WallPiece>,
    pub doors: Vec<DoorPanel>,
}

impl WallBuild {
    /// Returns `true` if nothing is to be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty() && self.doors.is_empty()
    }

    #[must_use]
    pub fn pieces_of(&self, kind: PieceKind) -> impl Iterator<Item = &WallPiece> {
        self.pieces.iter().filter(move |p| p.kind == kind)
    }
}

/// Cuts one straight wall around its openings.
pub struct BuildWall {
    length: f64,
    openings: Vec<(OpeningId, WallOpening)>,
    params: WallParams,
    hidden: bool,
}

impl BuildWall {
    /// Creates a new `BuildWall` for a wall of `length` cm without openings.
    #[must_use]
    pub fn new(length: f64, params: WallParams) -> Self {
        Self {
            length,
            openings: Vec::new(),
            params,
            hidden: false,
        }
    }

    /// Adds openings positioned along this wall.
    #[must_use]
    pub fn with_openings(
        mut self,
        openings: impl IntoIterator<Item = (OpeningId, WallOpening)>,
    ) -> Self {
        self.openings.extend(openings);
        self
    }

    /// Marks the wall hidden; a hidden wall builds nothing at all.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Executes the build.
    ///
    /// Openings are processed in ascending position. Pieces narrower or
    /// shorter than [`GEOMETRY_EPSILON`] are dropped, so overlapping
    /// openings and floor-to-ceiling openings produce no degenerate boxes.
    #[must_use]
    pub fn execute(&self) -> WallBuild {
        let mut build = WallBuild::default();
        if self.hidden {
            return build;
        }

        let WallParams {
            height: wall_h,
            thickness: wall_t,
            frame: ft,
            door_thickness,
        } = self.params;
        let frame_depth = wall_t + 1.0;
        let glass_depth = 1.0;

        let mut sorted = self.openings.clone();
        sorted.sort_by(|a, b| a.1.position.total_cmp(&b.1.position));

        let half_len = self.length / 2.0;
        let mut cursor = -half_len;
        let pieces = &mut build.pieces;

        for (id, opening) in &sorted {
            let dims = opening.kind.dimensions();
            let (ow, oh, sill) = (dims.width, dims.height, dims.sill);
            let center = opening.position - half_len;
            let left = center - ow / 2.0;
            let right = center + ow / 2.0;

            let solid = left - cursor;
            if solid > GEOMETRY_EPSILON {
                pieces.push(WallPiece::new(
                    PieceKind::Solid,
                    Point2::new(cursor + solid / 2.0, wall_h / 2.0),
                    Vector2::new(solid, wall_h),
                    wall_t,
                ));
            }

            let lintel = wall_h - sill - oh;
            if lintel > GEOMETRY_EPSILON {
                pieces.push(WallPiece::new(
                    PieceKind::Lintel,
                    Point2::new(center, sill + oh + lintel / 2.0),
                    Vector2::new(ow, lintel),
                    wall_t,
                ));
            }

            if sill > GEOMETRY_EPSILON {
                pieces.push(WallPiece::new(
                    PieceKind::Sill,
                    Point2::new(center, sill / 2.0),
                    Vector2::new(ow, sill),
                    wall_t,
                ));
            }

            if opening.kind.is_door() {
                build.doors.push(DoorPanel {
                    opening: *id,
                    hinge_x: left,
                    width: ow - 1.0,
                    height: oh,
                    thickness: door_thickness,
                    swing_angle: opening.swing_angle(),
                });
            } else {
                pieces.push(WallPiece::new(
                    PieceKind::Glass,
                    Point2::new(center, sill + oh / 2.0),
                    Vector2::new(ow, oh),
                    glass_depth,
                ));
            }

            pieces.push(WallPiece::new(
                PieceKind::Frame(FrameEdge::Top),
                Point2::new(center, sill + oh + ft / 2.0),
                Vector2::new(ow + ft * 2.0, ft),
                frame_depth,
            ));
            pieces.push(WallPiece::new(
                PieceKind::Frame(FrameEdge::Left),
                Point2::new(left - ft / 2.0, sill + oh / 2.0),
                Vector2::new(ft, oh),
                frame_depth,
            ));
            pieces.push(WallPiece::new(
                PieceKind::Frame(FrameEdge::Right),
                Point2::new(right + ft / 2.0, sill + oh / 2.0),
                Vector2::new(ft, oh),
                frame_depth,
            ));
            if sill > GEOMETRY_EPSILON {
                pieces.push(WallPiece::new(
                    PieceKind::Frame(FrameEdge::Bottom),
                    Point2::new(center, sill - ft / 2.0),
                    Vector2::new(ow + ft * 2.0, ft),
                    frame_depth,
                ));
            }

            cursor = cursor.max(right);
        }

        let solid = half_len - cursor;
        if solid > GEOMETRY_EPSILON {
            build.pieces.push(WallPiece::new(
                PieceKind::Solid,
                Point2::new(cursor + solid / 2.0, wall_h / 2.0),
                Vector2::new(solid, wall_h),
                wall_t,
            ));
        }

        build
    }
}
