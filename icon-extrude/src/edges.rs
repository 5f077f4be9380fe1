//! Detection of opacity boundaries, which is where side walls are needed.

use bitvec::vec::BitVec;
use itertools::Itertools as _;

use crate::face::{Side, SideMap};
use crate::opacity::OpacityField;
use crate::sprite::SpriteSize;

/// Marks, per side direction, the texels whose boundary on that side needs a wall
/// quad because opacity changes across it.
///
/// Created fresh per layer and discarded once runs have been extracted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BoundaryMarks {
    size: SpriteSize,
    marks: SideMap<BitVec>,
}

impl BoundaryMarks {
    #[inline]
    fn index(&self, u: u32, v: u32) -> usize {
        debug_assert!(u < self.size.width && v < self.size.height);
        v as usize * self.size.width as usize + u as usize
    }

    #[inline]
    pub fn marked(&self, side: Side, u: u32, v: u32) -> bool {
        self.marks[side][self.index(u, v)]
    }
}

/// Scans the opacity field once in raster order and marks every texel boundary at
/// which an opaque texel meets a transparent neighbor (or the field edge, which
/// counts as transparent).
pub(crate) fn find_boundary_marks(field: &OpacityField) -> BoundaryMarks {
    let size = field.size();
    let area = size.width as usize * size.height as usize;
    let mut marks = BoundaryMarks {
        size,
        marks: SideMap::from_fn(|_| BitVec::repeat(false, area)),
    };

    for (v, u) in (0..size.height).cartesian_product(0..size.width) {
        if !field.opaque(u, v) {
            continue;
        }
        let index = marks.index(u, v);
        if u == 0 || !field.opaque(u - 1, v) {
            marks.marks[Side::West].set(index, true);
        }
        if u + 1 == size.width || !field.opaque(u + 1, v) {
            marks.marks[Side::East].set(index, true);
        }
        if v == 0 || !field.opaque(u, v - 1) {
            marks.marks[Side::Up].set(index, true);
        }
        if v + 1 == size.height || !field.opaque(u, v + 1) {
            marks.marks[Side::Down].set(index, true);
        }
    }

    marks
}
