//! Greedy merging of boundary marks into maximal run spans, one wall quad each.

use crate::edges::BoundaryMarks;
use crate::face::Side;
use crate::occlusion::OcclusionLedger;
use crate::opacity::OpacityField;

/// A maximal contiguous span of boundary-marked, drawable texels along one axis,
/// at a fixed position on the other axis; the 2D description of one wall quad.
///
/// For [`Side::West`]/[`Side::East`], `line` is the u coordinate of the column and
/// `start`/`len` span v; for [`Side::Up`]/[`Side::Down`] it is the converse. Only
/// texels sharing a line produce coplanar walls, so only they may merge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Run {
    pub side: Side,
    pub line: u32,
    pub start: u32,
    pub len: u32,
}

/// Walks every line of every side direction and greedily merges consecutive marked,
/// drawable texels into maximal runs, handing each closed run to `emit`.
///
/// A texel is drawable when the ledger (if any) has not claimed it. A run in
/// progress is force-closed early, even though the mark bit continues, when the
/// field's translucency flag is set (keeping quads at single-texel granularity so
/// they blend in a correct order) or when the next texel is claimed (stopping this
/// layer's silhouette exactly where a nearer layer took over).
pub(crate) fn merge_runs(
    marks: &BoundaryMarks,
    field: &OpacityField,
    ledger: Option<&OcclusionLedger>,
    mut emit: impl FnMut(Run),
) {
    let size = field.size();
    let fragment = field.translucent_anywhere();

    for side in Side::ALL {
        let (line_count, line_len) = if side.merges_along_v() {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        };

        for line in 0..line_count {
            let mut building: Option<u32> = None;
            for pos in 0..line_len {
                let (u, v) = if side.merges_along_v() {
                    (line, pos)
                } else {
                    (pos, line)
                };
                let wanted = marks.marked(side, u, v)
                    && ledger.is_none_or(|ledger| !ledger.is_claimed(u, v));

                match building {
                    None if wanted => building = Some(pos),
                    Some(start) if !wanted => {
                        emit(Run { side, line, start, len: pos - start });
                        building = None;
                    }
                    _ => {}
                }
                if fragment && let Some(start) = building {
                    emit(Run { side, line, start, len: pos - start + 1 });
                    building = None;
                }
            }
            if let Some(start) = building {
                emit(Run { side, line, start, len: line_len - start });
            }
        }
    }
}
