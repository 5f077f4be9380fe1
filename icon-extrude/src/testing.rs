//! Tools for testing code that uses this crate.
//!
//! Do not rely on anything in this module existing in future versions.

use alloc::vec::Vec;

use euclid::{Point2D, Size2D};

use crate::sprite::{AtlasUv, Sprite, SpriteSize, Texel};

/// A [`Sprite`] backed by in-memory alpha rasters, constructed from array
/// literals laid out the way the image reads (row 0 on top).
///
/// Its [`texcoord()`](Sprite::texcoord) mapping is the identity, so texture
/// coordinates in the output equal texel coordinates, which keeps test
/// expectations legible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestSprite {
    size: SpriteSize,
    /// Row-major alpha values, one `Vec` per frame.
    frames: Vec<Vec<u8>>,
}

impl TestSprite {
    /// A single-frame sprite with the given alpha values.
    pub fn from_rows<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Self {
        Self {
            size: Size2D::new(W as u32, H as u32),
            frames: alloc::vec![rows.as_flattened().to_vec()],
        }
    }

    /// Appends one more animation frame, which must match the sprite's size.
    #[must_use]
    pub fn with_frame<const W: usize, const H: usize>(mut self, rows: [[u8; W]; H]) -> Self {
        assert_eq!(
            self.size,
            Size2D::new(W as u32, H as u32),
            "frame size mismatch"
        );
        self.frames.push(rows.as_flattened().to_vec());
        self
    }

    /// A degenerate sprite reporting the given dimensions and zero frames.
    pub fn no_frames(width: u32, height: u32) -> Self {
        Self {
            size: Size2D::new(width, height),
            frames: Vec::new(),
        }
    }
}

impl Sprite for TestSprite {
    fn size(&self) -> SpriteSize {
        self.size
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn alpha_at(&self, frame: usize, u: u32, v: u32) -> u8 {
        self.frames[frame][(v * self.size.width + u) as usize]
    }

    fn texcoord(&self, point: Point2D<f32, Texel>) -> Point2D<f32, AtlasUv> {
        point.cast_unit()
    }
}
