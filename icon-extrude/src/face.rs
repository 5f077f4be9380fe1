//! Face and side directions of the extruded icon slab, and containers keyed by them.

use core::ops::{Index, IndexMut};

use euclid::{Vector3D, vec3};

use crate::quads::IconRel;

/// Identifies one of the six faces an output quad can belong to.
///
/// The icon occupies x ∈ \[0, 1\] (texel u increasing rightward), y ∈ \[0, 1\]
/// (texel v increasing *downward*, so v = 0 is the top), and a thin slab of z
/// with [`Front`](Self::Front) toward the viewer (+z).
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum FaceDirection {
    /// Negative X; the silhouette wall whose normal vector is `(-1, 0, 0)`.
    West = 0,
    /// Negative Y; the silhouette wall whose normal vector is `(0, -1, 0)`; downward.
    Down = 1,
    /// Negative Z; the planar face pointing away from the viewer, normal `(0, 0, -1)`.
    Back = 2,
    /// Positive X; the silhouette wall whose normal vector is `(1, 0, 0)`.
    East = 3,
    /// Positive Y; the silhouette wall whose normal vector is `(0, 1, 0)`; upward.
    Up = 4,
    /// Positive Z; the planar face pointing toward the viewer, normal `(0, 0, 1)`.
    Front = 5,
}

impl FaceDirection {
    /// All six directions, for iteration.
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::West,
        FaceDirection::Down,
        FaceDirection::Back,
        FaceDirection::East,
        FaceDirection::Up,
        FaceDirection::Front,
    ];

    /// Returns the opposite face (the one with the negated normal).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> FaceDirection {
        match self {
            FaceDirection::West => FaceDirection::East,
            FaceDirection::Down => FaceDirection::Up,
            FaceDirection::Back => FaceDirection::Front,
            FaceDirection::East => FaceDirection::West,
            FaceDirection::Up => FaceDirection::Down,
            FaceDirection::Front => FaceDirection::Back,
        }
    }

    /// Returns the unit normal vector of this face.
    #[inline]
    pub fn normal_vector(self) -> Vector3D<f32, IconRel> {
        match self {
            FaceDirection::West => vec3(-1.0, 0.0, 0.0),
            FaceDirection::Down => vec3(0.0, -1.0, 0.0),
            FaceDirection::Back => vec3(0.0, 0.0, -1.0),
            FaceDirection::East => vec3(1.0, 0.0, 0.0),
            FaceDirection::Up => vec3(0.0, 1.0, 0.0),
            FaceDirection::Front => vec3(0.0, 0.0, 1.0),
        }
    }

    /// Whether this is one of the two planar (front/back) faces, as opposed to a
    /// silhouette wall.
    #[inline]
    pub const fn is_planar(self) -> bool {
        matches!(self, FaceDirection::Front | FaceDirection::Back)
    }
}

/// One of the four side directions in the 2D texel grid, identifying which
/// neighbor of a texel an opacity boundary faces.
///
/// Note that these are directions in u/v space: [`Up`](Self::Up) means
/// “toward smaller v”, which is toward *larger* y in mesh space.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
pub(crate) enum Side {
    /// Toward smaller u.
    West = 0,
    /// Toward larger u.
    East = 1,
    /// Toward smaller v (the top row of the raster).
    Up = 2,
    /// Toward larger v (the bottom row of the raster).
    Down = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::West, Side::East, Side::Up, Side::Down];

    /// The 3D face a wall quad generated for this side belongs to.
    #[inline]
    pub fn face_direction(self) -> FaceDirection {
        match self {
            Side::West => FaceDirection::West,
            Side::East => FaceDirection::East,
            Side::Up => FaceDirection::Up,
            Side::Down => FaceDirection::Down,
        }
    }

    /// Whether runs for this side extend along the v axis (within one column),
    /// as opposed to along the u axis (within one row).
    ///
    /// West/east walls lie in a constant-x plane, so only vertically adjacent
    /// boundary texels are coplanar and mergeable; up/down walls are the converse.
    #[inline]
    pub fn merges_along_v(self) -> bool {
        matches!(self, Side::West | Side::East)
    }
}

/// Container for one `T` per [`Side`].
///
/// Indexable by `Side`; iteration yields sides in the order of [`Side::ALL`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct SideMap<T> {
    pub west: T,
    pub east: T,
    pub up: T,
    pub down: T,
}

impl<T> SideMap<T> {
    /// Constructs a [`SideMap`] by applying `f` to each side.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            west: f(Side::West),
            east: f(Side::East),
            up: f(Side::Up),
            down: f(Side::Down),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;
    #[inline]
    fn index(&self, side: Side) -> &T {
        match side {
            Side::West => &self.west,
            Side::East => &self.east,
            Side::Up => &self.up,
            Side::Down => &self.down,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    #[inline]
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::West => &mut self.west,
            Side::East => &mut self.east,
            Side::Up => &mut self.up,
            Side::Down => &mut self.down,
        }
    }
}
