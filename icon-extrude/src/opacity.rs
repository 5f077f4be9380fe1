//! Per-layer opacity analysis: the first step of extrusion.

use bitvec::vec::BitVec;

use crate::sprite::{Sprite, SpriteSize};

/// Alpha values greater than this count as opaque (silhouette-contributing).
///
/// This is the 0.1 translucency threshold of the host's icon rendering expressed
/// on the 0–255 scale.
pub const ALPHA_CUTOFF: u8 = 25;

/// Derived view over one layer's raster answering opacity queries for the whole
/// extrusion of that layer.
///
/// Two different bitsets are kept on purpose. The *silhouette* is the union of
/// opacity over all animation frames, so that geometry exists wherever any frame
/// shows something (otherwise animated texels would have gaps in the walls).
/// The *frame-0* set is what gets claimed in the [`OcclusionLedger`], giving later
/// layers a stable, non-flickering notion of “solid here” without per-frame
/// remeshing. Do not unify the two.
///
/// [`OcclusionLedger`]: crate::occlusion::OcclusionLedger
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct OpacityField {
    size: SpriteSize,
    /// Texels opaque in at least one frame, row-major.
    silhouette: BitVec,
    /// Texels opaque in frame 0, row-major.
    frame_zero: BitVec,
    /// Whether any frame contains a texel that is neither fully transparent nor
    /// fully opaque. Forces maximal run fragmentation (see [`crate::runs`]).
    translucent: bool,
}

impl OpacityField {
    /// Scans every texel of every frame of `sprite` once.
    pub fn new(sprite: &dyn Sprite) -> Self {
        let size = sprite.size();
        let area = size.width as usize * size.height as usize;
        let mut silhouette = BitVec::repeat(false, area);
        let mut frame_zero = BitVec::repeat(false, area);
        let mut translucent = false;

        for frame in 0..sprite.frame_count() {
            let mut index = 0;
            for v in 0..size.height {
                for u in 0..size.width {
                    let alpha = sprite.alpha_at(frame, u, v);
                    if alpha > ALPHA_CUTOFF {
                        silhouette.set(index, true);
                        if frame == 0 {
                            frame_zero.set(index, true);
                        }
                        if alpha < u8::MAX {
                            translucent = true;
                        }
                    }
                    index += 1;
                }
            }
        }

        Self {
            size,
            silhouette,
            frame_zero,
            translucent,
        }
    }

    #[inline]
    pub fn size(&self) -> SpriteSize {
        self.size
    }

    #[inline]
    fn index(&self, u: u32, v: u32) -> usize {
        debug_assert!(u < self.size.width && v < self.size.height);
        v as usize * self.size.width as usize + u as usize
    }

    /// Whether the texel contributes to the silhouette (opaque in any frame).
    #[inline]
    pub fn opaque(&self, u: u32, v: u32) -> bool {
        self.silhouette[self.index(u, v)]
    }

    /// Whether the texel is opaque in frame 0 specifically.
    #[inline]
    pub fn frame_zero_opaque(&self, u: u32, v: u32) -> bool {
        self.frame_zero[self.index(u, v)]
    }

    /// Whether any texel anywhere in the raster is partially translucent.
    #[inline]
    pub fn translucent_anywhere(&self) -> bool {
        self.translucent
    }
}
