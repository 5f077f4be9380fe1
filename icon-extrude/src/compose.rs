//! The extrusion pipeline: opacity analysis, boundary marking, run merging, and
//! quad emission, composed over a whole layer stack.

use crate::edges::find_boundary_marks;
use crate::face::FaceDirection;
use crate::mesh::{Flaws, GroupKey, Layer, QuadSink, RenderBucket};
use crate::occlusion::OcclusionLedger;
use crate::opacity::OpacityField;
use crate::quads::{PackedColor, QuadAssembler};
use crate::runs::merge_runs;

/// Extrudes a layer stack into quads, delivering them to `sink`.
///
/// `layers` is ordered back to front, the way a layer stack is authored; the
/// backmost layer sits at index 0. Layers are processed nearest first, so quads
/// reach the sink in front-to-back order and each layer's silhouette suppresses
/// the wall quads of the layers behind it (judged by frame 0 of animated rasters,
/// see [`Sprite`](crate::Sprite)). Planar front/back quads are never suppressed.
///
/// Each layer contributes, for its extruded slab:
///
/// * one full-rectangle front quad and one back quad, and
/// * one wall quad per maximal run of unsuppressed silhouette boundary texels
///   (single-texel runs if the raster is translucent anywhere).
///
/// A layer with nothing to measure (zero width, height, or frame count) is
/// skipped with [`Flaws::SKIPPED_LAYER`]. A layer whose dimensions disagree with
/// the rest of the stack is still extruded, but without occlusion bookkeeping,
/// reported as [`Flaws::UNLEDGERED_LAYER`]. The returned flaws are the union over
/// all layers; an empty stack produces no quads and no flaws.
pub fn extrude_layers(layers: &[Layer<'_>], sink: &mut impl QuadSink) -> Flaws {
    let mut flaws = Flaws::empty();

    // A single layer has nothing to occlude it, so skip the bookkeeping.
    let use_ledger = layers.len() > 1;
    let mut ledger: Option<OcclusionLedger> = None;

    for (depth_rank, layer) in layers.iter().enumerate().rev() {
        let sprite = layer.sprite;
        let size = sprite.size();
        if size.width == 0 || size.height == 0 || sprite.frame_count() == 0 {
            log::warn!(
                "skipping layer {depth_rank}: nothing to extrude \
                 ({}×{} texels, {} frames)",
                size.width,
                size.height,
                sprite.frame_count(),
            );
            flaws |= Flaws::SKIPPED_LAYER;
            continue;
        }

        let field = OpacityField::new(sprite);

        // The ledger takes its dimensions from the nearest valid layer. A layer
        // of any other size cannot be compared texel-for-texel, so it neither
        // consults the ledger nor claims into it.
        if use_ledger && ledger.is_none() {
            ledger = Some(OcclusionLedger::new(size));
        }
        let ledgered = ledger.as_ref().is_some_and(|ledger| ledger.size() == size);
        if use_ledger && !ledgered {
            log::warn!(
                "layer {depth_rank} is {}×{} texels but the stack's occlusion \
                 ledger is sized for another layer; extruding it unledgered",
                size.width,
                size.height,
            );
            flaws |= Flaws::UNLEDGERED_LAYER;
        }

        let marks = find_boundary_marks(&field);

        let bucket = layer.bucket.unwrap_or(if field.translucent_anywhere() {
            RenderBucket::Translucent
        } else {
            RenderBucket::Icon
        });
        let key = GroupKey {
            bucket,
            skip_tint: layer.skip_tint,
        };

        let assembler = QuadAssembler::new(
            sprite,
            layer.color.unwrap_or(PackedColor::WHITE),
            layer.light,
            depth_rank as u32,
        );

        merge_runs(
            &marks,
            &field,
            if ledgered { ledger.as_ref() } else { None },
            |run| sink.push(key, assembler.wall_quad(&run)),
        );
        sink.push(key, assembler.planar_quad(FaceDirection::Front));
        sink.push(key, assembler.planar_quad(FaceDirection::Back));

        if ledgered && let Some(ledger) = &mut ledger {
            ledger.claim_frame_zero(&field);
        }
    }

    flaws
}
