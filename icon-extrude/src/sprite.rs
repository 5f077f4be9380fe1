//! The trait through which this library reads icon pixel data.

use euclid::{Point2D, Size2D};

/// Unit-of-measure identifier used with [`euclid`] for “whole texels” of a sprite,
/// with u increasing rightward and v increasing downward from the top-left corner.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Texel {}

/// Unit-of-measure identifier used with [`euclid`] for final texture coordinates as
/// understood by whatever consumes the generated quads (typically an atlas UV space).
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum AtlasUv {}

/// Size of a sprite in texels.
pub type SpriteSize = Size2D<u32, Texel>;

/// Read access to one icon raster: its dimensions, per-frame alpha values, and the
/// mapping from local texel coordinates to final texture coordinates.
///
/// Implement this for your sprite/atlas storage. The raster is treated as immutable;
/// mesh extrusion reads it and never writes.
///
/// Animation (multiple frames) affects extrusion as follows: geometry exists wherever
/// a texel is opaque in *any* frame, while the inter-layer occlusion ledger is fed
/// from frame 0 only. How the texture is actually animated at draw time (usually by
/// remapping coordinates per frame) is entirely the implementor's business.
pub trait Sprite {
    /// Dimensions of every frame of the raster, in texels.
    fn size(&self) -> SpriteSize;

    /// Number of animation frames. A well-formed sprite has at least one.
    fn frame_count(&self) -> usize;

    /// Alpha value of the texel at `(u, v)` in the given frame, in 0–255.
    ///
    /// Callers guarantee `frame < self.frame_count()` and `(u, v)` within
    /// [`size()`](Self::size).
    fn alpha_at(&self, frame: usize, u: u32, v: u32) -> u8;

    /// Maps a point in local texel coordinates (ranging over 0 to width/height,
    /// fractions addressing within a texel) to the final texture coordinates stored
    /// in output vertices.
    ///
    /// Atlas packing and frame remapping live behind this function and are opaque
    /// to the extrusion engine.
    fn texcoord(&self, point: Point2D<f32, Texel>) -> Point2D<f32, AtlasUv>;
}
