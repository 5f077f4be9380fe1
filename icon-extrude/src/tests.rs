//! Tests of the extrusion pipeline as a whole. Unit tests of the individual
//! stages live with their modules.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::testing::TestSprite;
use crate::{
    FaceDirection, Flaws, IconMesh, LAYER_DEPTH_BIAS, Layer, PackedColor, Quad, RenderBucket,
    THICKNESS,
};

fn wall_count(mesh: &IconMesh) -> usize {
    mesh.all_quads()
        .filter(|quad| !quad.face().is_planar())
        .count()
}

#[test]
fn output_is_deterministic() {
    let sprite = TestSprite::from_rows([[255, 0, 128], [0, 255, 255]]);
    let layers = [Layer {
        color: Some(PackedColor(0xFF40_8020)),
        light: 3,
        ..Layer::plain(&sprite)
    }];
    assert_eq!(IconMesh::new(&layers), IconMesh::new(&layers));
}

#[test]
fn solid_square_is_a_box_of_six_quads() {
    let sprite = TestSprite::from_rows([[255u8; 16]; 16]);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);

    assert_eq!(mesh.count_quads(), 6);
    for face in FaceDirection::ALL {
        assert_eq!(
            mesh.all_quads().filter(|quad| quad.face() == face).count(),
            1,
            "expected exactly one {face:?} quad",
        );
    }
}

#[rstest]
#[case::square(TestSprite::from_rows([[255u8; 4]; 4]))]
#[case::wide(TestSprite::from_rows([[255u8; 7]; 2]))]
#[case::single_row(TestSprite::from_rows([[255u8; 5]; 1]))]
#[case::single_column(TestSprite::from_rows([[255u8; 1]; 5]))]
fn solid_rectangles_always_mesh_to_six_quads(#[case] sprite: TestSprite) {
    assert_eq!(IconMesh::new(&[Layer::plain(&sprite)]).count_quads(), 6);
}

#[test]
fn checkerboard_walls_cannot_merge() {
    let rows: [[u8; 16]; 16] = core::array::from_fn(|v| {
        core::array::from_fn(|u| if (u + v) % 2 == 0 { 255 } else { 0 })
    });
    let sprite = TestSprite::from_rows(rows);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);

    // 128 isolated opaque texels, four single-texel walls each, plus the two
    // planar faces.
    assert_eq!(wall_count(&mesh), 128 * 4);
    assert_eq!(mesh.count_quads(), 128 * 4 + 2);
}

#[test]
fn single_texel_box_exact_geometry() {
    let sprite = TestSprite::from_rows([[255]]);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);
    assert_eq!(mesh.count_quads(), 6);

    let bb = mesh.bounding_box().unwrap();
    assert_eq!((bb.min.x, bb.min.y, bb.min.z), (0.0, 0.0, 0.5 - THICKNESS / 2.0));
    assert_eq!((bb.max.x, bb.max.y, bb.max.z), (1.0, 1.0, 0.5 + THICKNESS / 2.0));

    let front: &Quad = mesh
        .all_quads()
        .find(|quad| quad.face() == FaceDirection::Front)
        .unwrap();
    assert_eq!(
        front.vertices.map(|vertex| {
            let p = vertex.position;
            (p.x, p.y, p.z)
        }),
        [
            (0.0, 0.0, 0.5 + THICKNESS / 2.0),
            (1.0, 0.0, 0.5 + THICKNESS / 2.0),
            (1.0, 1.0, 0.5 + THICKNESS / 2.0),
            (0.0, 1.0, 0.5 + THICKNESS / 2.0),
        ]
    );
}

#[test]
fn corner_texel_walls_hug_the_texel_but_planes_span_the_raster() {
    // Only the top-left texel of a 2×2 raster is opaque.
    let sprite = TestSprite::from_rows([[255, 0], [0, 0]]);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);
    assert_eq!(mesh.count_quads(), 6);

    for quad in mesh.all_quads() {
        let xs = quad.vertices.map(|vertex| vertex.position.x);
        let ys = quad.vertices.map(|vertex| vertex.position.y);
        match quad.face() {
            // The planar faces cover the full bounding rectangle regardless of
            // which texels are opaque.
            FaceDirection::Front | FaceDirection::Back => {
                assert!(xs.contains(&0.0) && xs.contains(&1.0));
                assert!(ys.contains(&0.0) && ys.contains(&1.0));
            }
            // The walls outline texel (0, 0): x ∈ [0, ½], y ∈ [½, 1].
            FaceDirection::West => assert_eq!(xs, [0.0; 4]),
            FaceDirection::East => assert_eq!(xs, [0.5; 4]),
            FaceDirection::Up => assert_eq!(ys, [1.0; 4]),
            FaceDirection::Down => assert_eq!(ys, [0.5; 4]),
        }
    }
}

#[test]
fn covered_back_layer_keeps_only_planar_quads() {
    let sprite = TestSprite::from_rows([[255, 255], [255, 255]]);
    let mesh = IconMesh::new(&[
        // Back layer; split into its own group so its quads are countable.
        Layer {
            skip_tint: true,
            ..Layer::plain(&sprite)
        },
        Layer::plain(&sprite),
    ]);

    let [front_group, back_group] = mesh.groups() else {
        panic!("expected two groups, got {:?}", mesh.groups());
    };
    assert!(!front_group.key.skip_tint && back_group.key.skip_tint);
    assert_eq!(front_group.quads.len(), 6);
    assert_eq!(back_group.quads.len(), 2);
    assert!(back_group.quads.iter().all(|quad| quad.face().is_planar()));
}

#[test]
fn animated_cover_occludes_only_by_its_first_frame() {
    // Same silhouette as a solid 1×2 cover, but empty in frame 0.
    let animated = TestSprite::from_rows([[0, 0]]).with_frame([[255, 255]]);
    let solid = TestSprite::from_rows([[255, 255]]);

    let mesh = IconMesh::new(&[
        Layer {
            skip_tint: true,
            ..Layer::plain(&solid)
        },
        Layer::plain(&animated),
    ]);

    // The animated layer's walls come from the union silhouette.
    let [front_group, back_group] = mesh.groups() else {
        panic!("expected two groups, got {:?}", mesh.groups());
    };
    assert_eq!(front_group.quads.len(), 6);
    // But its empty first frame claims nothing, so the solid layer behind it
    // keeps all of its walls.
    assert_eq!(back_group.quads.len(), 6);
}

#[test]
fn translucent_layer_fragments_and_rebuckets() {
    let sprite = TestSprite::from_rows([[128, 128, 128, 128]]);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);

    assert_eq!(mesh.groups().len(), 1);
    assert_eq!(mesh.groups()[0].key.bucket, RenderBucket::Translucent);
    // Up and down walls fragment into one quad per texel instead of one
    // four-texel run each.
    assert_eq!(wall_count(&mesh), 4 + 4 + 1 + 1);
}

#[test]
fn bucket_hint_overrides_the_default() {
    let sprite = TestSprite::from_rows([[128]]);
    let mesh = IconMesh::new(&[Layer {
        bucket: Some(RenderBucket::Custom(3)),
        ..Layer::plain(&sprite)
    }]);
    assert_eq!(mesh.groups()[0].key.bucket, RenderBucket::Custom(3));
}

#[test]
fn color_and_light_reach_every_vertex() {
    let sprite = TestSprite::from_rows([[255, 0], [255, 255]]);
    let color = PackedColor(0xFF12_3456);
    let mesh = IconMesh::new(&[Layer {
        color: Some(color),
        light: 7,
        ..Layer::plain(&sprite)
    }]);

    assert!(!mesh.is_empty());
    for quad in mesh.all_quads() {
        for vertex in quad.vertices {
            assert_eq!((vertex.color, vertex.light), (color, 7));
        }
    }
}

#[test]
fn layer_with_no_frames_is_skipped() {
    let sprite = TestSprite::no_frames(8, 8);
    let mesh = IconMesh::new(&[Layer::plain(&sprite)]);
    assert!(mesh.is_empty());
    assert_eq!(mesh.flaws(), Flaws::SKIPPED_LAYER);
}

#[test]
fn mismatched_layer_is_extruded_without_occlusion() {
    let big = TestSprite::from_rows([[255, 255], [255, 255]]);
    let small = TestSprite::from_rows([[255]]);
    let mesh = IconMesh::new(&[Layer::plain(&big), Layer::plain(&small)]);

    assert_eq!(mesh.flaws(), Flaws::UNLEDGERED_LAYER);
    // The back layer cannot be compared against the 1×1 ledger, so it keeps
    // its full set of walls.
    assert_eq!(mesh.count_quads(), 6 + 6);
}

#[test]
fn stacked_planar_faces_are_separated_in_depth() {
    let sprite = TestSprite::from_rows([[255]]);
    let mesh = IconMesh::new(&[
        Layer {
            skip_tint: true,
            ..Layer::plain(&sprite)
        },
        Layer::plain(&sprite),
    ]);

    let front_z_of = |group: &crate::QuadGroup| {
        group
            .quads
            .iter()
            .find(|quad| quad.face() == FaceDirection::Front)
            .unwrap()
            .vertices[0]
            .position
            .z
    };
    let [front_group, back_group] = mesh.groups() else {
        panic!("expected two groups");
    };
    assert_eq!(
        front_z_of(front_group) - front_z_of(back_group),
        LAYER_DEPTH_BIAS
    );
}

#[test]
fn empty_stack_produces_the_empty_mesh() {
    assert_eq!(IconMesh::new(&[]), IconMesh::EMPTY);
}
