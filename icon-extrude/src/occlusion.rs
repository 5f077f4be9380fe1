//! Inter-layer occlusion bookkeeping.

use bitvec::vec::BitVec;

use crate::opacity::OpacityField;
use crate::sprite::SpriteSize;

/// Records which texels have been claimed by already-processed (nearer) layers of
/// one multi-layer mesh build, so that farther layers suppress wall geometry there.
///
/// Scoped to exactly one build; bits only ever go from unclaimed to claimed.
/// Single-layer builds have nothing to occlude against and skip the ledger
/// entirely, which is expressed as `Option<&OcclusionLedger>` at the reading side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct OcclusionLedger {
    size: SpriteSize,
    claimed: BitVec,
}

impl OcclusionLedger {
    pub fn new(size: SpriteSize) -> Self {
        Self {
            size,
            claimed: BitVec::repeat(false, size.width as usize * size.height as usize),
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

    #[inline]
    pub fn is_claimed(&self, u: u32, v: u32) -> bool {
        self.claimed[self.index(u, v)]
    }

    #[inline]
    pub fn claim(&mut self, u: u32, v: u32) {
        let index = self.index(u, v);
        self.claimed.set(index, true);
    }

    /// Claims every texel that is opaque in frame 0 of the given field.
    ///
    /// Frame 0, not the all-frames union, so that a texel which cycles to
    /// transparent never suppresses the geometry that would show through it.
    pub fn claim_frame_zero(&mut self, field: &OpacityField) {
        debug_assert_eq!(self.size, field.size(), "ledger sized for a different raster");
        for v in 0..self.size.height {
            for u in 0..self.size.width {
                if field.frame_zero_opaque(u, v) {
                    self.claim(u, v);
                }
            }
        }
    }
}
