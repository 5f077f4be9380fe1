//! Output mesh types and the sink interface through which quads are delivered.

use alloc::vec::Vec;
use core::fmt;

use euclid::Box3D;

use crate::quads::{IconRel, PackedColor, Quad};
use crate::sprite::Sprite;

bitflags::bitflags! {
    /// Deficiencies of an [`IconMesh`]: reasons why the produced geometry may not
    /// fully represent the layer stack it was built from.
    ///
    /// It is a [`bitflags`] generated bit-flag type.
    /// The [empty](Self::empty) set means no flaws are present.
    #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
    pub struct Flaws: u8 {
        /// A layer was skipped because its raster had no usable pixels to measure
        /// (zero width, height, or frame count).
        const SKIPPED_LAYER = 1 << 0;

        /// A layer was extruded without occlusion bookkeeping because its raster
        /// dimensions did not match the rest of the stack.
        const UNLEDGERED_LAYER = 1 << 1;
    }
}

/// External grouping key for quads that want a particular blending behavior.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum RenderBucket {
    /// The icon's normal appearance.
    Icon,
    /// Alpha-blended rendering for layers containing partially translucent texels.
    Translucent,
    /// A bucket meaningful only to the consumer, requested explicitly by a layer.
    Custom(u32),
}

/// Identifies which [`QuadGroup`] a quad belongs to.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GroupKey {
    /// Render bucket the group's quads should be drawn in.
    pub bucket: RenderBucket,
    /// Whether the consumer's tinting step should be skipped for these quads.
    pub skip_tint: bool,
}

/// One visual layer of the icon stack to be extruded.
///
/// Layer lists are ordered back to front: index 0 is the backmost (drawn-behind)
/// layer, the way a layer stack is authored.
#[expect(clippy::exhaustive_structs)]
pub struct Layer<'a> {
    /// Pixel data of this layer.
    pub sprite: &'a dyn Sprite,
    /// Uniform color applied to every vertex; [`None`] means no override (white).
    pub color: Option<PackedColor>,
    /// Light/emissivity bias, 0–15, copied to every vertex.
    pub light: u8,
    /// Passed through opaquely to the consumer on this layer's quad groups.
    pub skip_tint: bool,
    /// Requests a specific render bucket instead of the default choice
    /// (translucent rasters default to [`RenderBucket::Translucent`], all others
    /// to [`RenderBucket::Icon`]).
    pub bucket: Option<RenderBucket>,
}

impl<'a> Layer<'a> {
    /// A layer with no color override, no light bias, and default bucketing.
    pub fn plain(sprite: &'a dyn Sprite) -> Self {
        Self {
            sprite,
            color: None,
            light: 0,
            skip_tint: false,
            bucket: None,
        }
    }
}

impl fmt::Debug for Layer<'_> {
    #[mutants::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            sprite,
            color,
            light,
            skip_tint,
            bucket,
        } = self;
        f.debug_struct("Layer")
            .field("sprite.size", &sprite.size())
            .field("color", color)
            .field("light", light)
            .field("skip_tint", skip_tint)
            .field("bucket", bucket)
            .finish()
    }
}

/// Receiver of finished quads, grouped by [`GroupKey`].
///
/// Implement this to stream geometry straight into your own buffers; or use
/// [`IconMesh`], which implements it by collecting.
pub trait QuadSink {
    /// Accepts one finished quad belonging to the given group.
    fn push(&mut self, key: GroupKey, quad: Quad);
}

/// Quads sharing one [`GroupKey`].
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Debug, PartialEq)]
pub struct QuadGroup {
    /// The group's key.
    pub key: GroupKey,
    /// The group's quads, in emission order.
    pub quads: Vec<Quad>,
}

/// The finished extrusion of a layer stack: ordered groups of quads plus any
/// [`Flaws`] encountered while building them.
///
/// Get one from [`IconMesh::new()`]. Groups appear in the order their first quad
/// was emitted, which is nearest layer first.
#[derive(Clone, Debug, PartialEq)]
pub struct IconMesh {
    groups: Vec<QuadGroup>,
    flaws: Flaws,
}

impl IconMesh {
    /// The mesh with no quads, which has no effect when drawn.
    pub const EMPTY: Self = Self {
        groups: Vec::new(),
        flaws: Flaws::empty(),
    };

    /// Extrudes the given layer stack (ordered back to front) into a new mesh.
    pub fn new(layers: &[Layer<'_>]) -> Self {
        let mut mesh = Self::EMPTY;
        let flaws = crate::extrude_layers(layers, &mut mesh);
        mesh.flaws = flaws;
        mesh
    }

    /// The quad groups, nearest layer's first.
    #[inline]
    pub fn groups(&self) -> &[QuadGroup] {
        &self.groups
    }

    /// Reports any flaws in this mesh: reasons why it may not faithfully
    /// represent the layer stack.
    #[inline]
    pub fn flaws(&self) -> Flaws {
        self.flaws
    }

    /// Returns whether this mesh contains no quads so it has no visual effect.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.quads.is_empty())
    }

    /// Total number of quads across all groups.
    pub fn count_quads(&self) -> usize {
        self.groups.iter().map(|group| group.quads.len()).sum()
    }

    /// Iterates over every quad of every group.
    pub fn all_quads(&self) -> impl Iterator<Item = &Quad> {
        self.groups.iter().flat_map(|group| group.quads.iter())
    }

    /// Bounding box of the mesh's vertices, or [`None`] if there are none.
    pub fn bounding_box(&self) -> Option<Box3D<f32, IconRel>> {
        if self.is_empty() {
            return None;
        }
        Some(Box3D::from_points(
            self.all_quads()
                .flat_map(|quad| quad.vertices.iter().map(|vertex| vertex.position)),
        ))
    }
}

impl Default for IconMesh {
    /// Returns [`IconMesh::EMPTY`].
    fn default() -> Self {
        Self::EMPTY
    }
}

impl QuadSink for IconMesh {
    fn push(&mut self, key: GroupKey, quad: Quad) {
        // Layers are processed one at a time, so the group being appended to is
        // almost always the last one.
        match self.groups.iter_mut().rev().find(|group| group.key == key) {
            Some(group) => group.quads.push(quad),
            None => self.groups.push(QuadGroup {
                key,
                quads: alloc::vec![quad],
            }),
        }
    }
}
