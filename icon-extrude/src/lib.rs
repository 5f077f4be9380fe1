//! Algorithms for converting flat pixel-art icons (RGBA rasters, possibly animated)
//! into thin extruded 3D quad meshes.
//!
//! The produced mesh consists of a front face, a back face, and minimal side-wall
//! geometry that follows the silhouette of opaque texels. When several icons are
//! stacked as visual layers, a shared pixel-occupancy ledger suppresses side walls
//! of farther layers underneath texels already claimed by nearer layers, so the
//! stack can be rendered without depth fighting or redundant overdraw.
//!
//! Restrictions and caveats:
//! * Quads are wound counterclockwise as seen from outside the icon slab.
//! * The geometry is built once per icon; animation is expected to be expressed
//!   through texture coordinates (see [`Sprite::texcoord()`]), not remeshing.
//! * This library never talks to a GPU or file; callers receive finished quads
//!   through [`QuadSink`] or as an [`IconMesh`].
//!
//! # Getting started
//!
//! Implement [`Sprite`] for your texture/atlas storage, describe the stack with
//! [`Layer`] values ordered back to front, and call [`IconMesh::new()`] (or
//! [`extrude_layers()`] with your own [`QuadSink`]).

// This crate is `no_std` compatible; it needs `alloc` only for the bitsets and
// the output quad storage.
#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

mod compose;
pub use compose::extrude_layers;
mod edges;
mod face;
pub use face::FaceDirection;
mod mesh;
pub use mesh::*;
mod occlusion;
mod opacity;
pub use opacity::ALPHA_CUTOFF;
mod quads;
pub use quads::{IconRel, IconVertex, LAYER_DEPTH_BIAS, PackedColor, Quad, THICKNESS};
mod runs;
mod sprite;
pub use sprite::*;
#[doc(hidden)]
pub mod testing;

#[cfg(test)]
mod tests;
