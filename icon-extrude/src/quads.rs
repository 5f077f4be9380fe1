//! Conversion of runs and bounding rectangles into positioned, textured 3D quads.

use euclid::{Point2D, Point3D, point2, point3};

use crate::face::{FaceDirection, Side};
use crate::runs::Run;
use crate::sprite::{AtlasUv, Sprite, SpriteSize, Texel};

/// Unit-of-measure identifier used with [`euclid`] for positions within the icon's
/// model space: x and y span 0 to 1 over the raster, z spans the slab thickness
/// around 0.5.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum IconRel {}

/// Total front-to-back thickness of the extruded slab, as a fraction of the icon's
/// nominal size. Uniform regardless of content.
pub const THICKNESS: f32 = 1.0 / 16.0;

/// Additional outward displacement of both planar faces per stack position, so that
/// the coplanar faces of stacked layers do not fight in the depth buffer.
pub const LAYER_DEPTH_BIAS: f32 = 1.0 / 512.0;

/// Inward nudge, in texels, applied to the along-run texture span of wall quads so
/// that sampling at the quad edge does not bleed from the neighboring texel.
const WALL_UV_INSET: f32 = 1.0 / 128.0;

/// A color in `0xAARRGGBB` channel order, as used by packed vertex formats.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Opaque white; the identity value for layers without a color override.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// The native-endian bytes of the packed value, for copying into vertex buffers.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        bytemuck::must_cast(self.0)
    }
}

impl From<u32> for PackedColor {
    #[inline]
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

/// One corner of an output [`Quad`].
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconVertex {
    /// Position in icon model space.
    pub position: Point3D<f32, IconRel>,
    /// Final texture coordinate, as produced by [`Sprite::texcoord()`].
    pub texcoord: Point2D<f32, AtlasUv>,
    /// Packed layer color, [`PackedColor::WHITE`] when the layer has no override.
    pub color: PackedColor,
    /// Light/emissivity value of the layer, 0–15.
    pub light: u8,
    /// The face this vertex's quad belongs to; doubles as the normal.
    pub face: FaceDirection,
}

/// Four vertices in counterclockwise order as seen from outside the slab;
/// the terminal output unit of this library. Immutable once built.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// The corners, in counterclockwise winding order.
    pub vertices: [IconVertex; 4],
}

impl Quad {
    /// The face all four vertices of this quad belong to.
    #[inline]
    pub fn face(&self) -> FaceDirection {
        self.vertices[0].face
    }
}

/// Per-layer ingredients for quad assembly that are uniform across all of the
/// layer's quads, so they are computed once per layer.
pub(crate) struct QuadAssembler<'a> {
    sprite: &'a dyn Sprite,
    size: SpriteSize,
    color: PackedColor,
    light: u8,
    /// z of the viewer-facing plane; greater than `back_z`.
    front_z: f32,
    /// z of the away-facing plane.
    back_z: f32,
}

impl<'a> QuadAssembler<'a> {
    /// `depth_rank` is the layer's position counted from the back of the stack;
    /// it selects the depth bias keeping stacked planar faces apart.
    pub fn new(sprite: &'a dyn Sprite, color: PackedColor, light: u8, depth_rank: u32) -> Self {
        let bias = depth_rank as f32 * LAYER_DEPTH_BIAS;
        Self {
            sprite,
            size: sprite.size(),
            color,
            light,
            front_z: 0.5 + THICKNESS / 2.0 + bias,
            back_z: 0.5 - THICKNESS / 2.0 - bias,
        }
    }

    #[inline]
    fn vertex(&self, position: Point3D<f32, IconRel>, tex: Point2D<f32, Texel>, face: FaceDirection) -> IconVertex {
        IconVertex {
            position,
            texcoord: self.sprite.texcoord(tex),
            color: self.color,
            light: self.light,
            face,
        }
    }

    /// Builds the wall quad for one run, connecting the front plane to the back
    /// plane along the silhouette.
    pub fn wall_quad(&self, run: &Run) -> Quad {
        debug_assert!(run.len > 0, "zero-length run reached quad assembly");
        let width = self.size.width as f32;
        let height = self.size.height as f32;
        let face = run.side.face_direction();
        let (zb, zf) = (self.back_z, self.front_z);

        let vertices = if run.side.merges_along_v() {
            // West/east: a constant-x wall at the column's edge, spanning rows.
            let (v0, v1) = (run.start as f32, (run.start + run.len) as f32);
            let x = match run.side {
                Side::West => run.line as f32 / width,
                _ => (run.line + 1) as f32 / width,
            };
            // Texel v increases downward, mesh y increases upward.
            let y_low = (height - v1) / height;
            let y_high = (height - v0) / height;
            // Sample the center of the boundary texel's column, inset along the run.
            let tu = run.line as f32 + 0.5;
            let (tv0, tv1) = (v0 + WALL_UV_INSET, v1 - WALL_UV_INSET);

            let corner = |y, tv| match run.side {
                Side::West => [
                    self.vertex(point3(x, y, zb), point2(tu, tv), face),
                    self.vertex(point3(x, y, zf), point2(tu, tv), face),
                ],
                _ => [
                    self.vertex(point3(x, y, zf), point2(tu, tv), face),
                    self.vertex(point3(x, y, zb), point2(tu, tv), face),
                ],
            };
            let [a, b] = corner(y_low, tv1);
            let [d, c] = corner(y_high, tv0);
            [a, b, c, d]
        } else {
            // Up/down: a constant-y wall at the row's edge, spanning columns.
            let (u0, u1) = (run.start as f32, (run.start + run.len) as f32);
            let y = match run.side {
                Side::Up => (height - run.line as f32) / height,
                _ => (height - (run.line + 1) as f32) / height,
            };
            let x_low = u0 / width;
            let x_high = u1 / width;
            let tv = run.line as f32 + 0.5;
            let (tu0, tu1) = (u0 + WALL_UV_INSET, u1 - WALL_UV_INSET);

            let corner = |x, tu| match run.side {
                Side::Up => [
                    self.vertex(point3(x, y, zf), point2(tu, tv), face),
                    self.vertex(point3(x, y, zb), point2(tu, tv), face),
                ],
                _ => [
                    self.vertex(point3(x, y, zb), point2(tu, tv), face),
                    self.vertex(point3(x, y, zf), point2(tu, tv), face),
                ],
            };
            let [a, d] = corner(x_low, tu0);
            let [b, c] = corner(x_high, tu1);
            [a, b, c, d]
        };

        Quad { vertices }
    }

    /// Builds one of the two planar quads covering the raster's full bounding
    /// rectangle. These exist independently of run detection and are never
    /// subject to the occlusion ledger.
    pub fn planar_quad(&self, face: FaceDirection) -> Quad {
        debug_assert!(face.is_planar());
        let width = self.size.width as f32;
        let height = self.size.height as f32;

        // Raster corners in (position x, position y, texel u, texel v) form,
        // counterclockwise as seen from the front.
        let bl = (0.0, 0.0, 0.0, height);
        let br = (1.0, 0.0, width, height);
        let tr = (1.0, 1.0, width, 0.0);
        let tl = (0.0, 1.0, 0.0, 0.0);
        let (z, corners) = match face {
            FaceDirection::Front => (self.front_z, [bl, br, tr, tl]),
            _ => (self.back_z, [tl, tr, br, bl]),
        };

        Quad {
            vertices: corners
                .map(|(x, y, tu, tv)| self.vertex(point3(x, y, z), point2(tu, tv), face)),
        }
    }
}
