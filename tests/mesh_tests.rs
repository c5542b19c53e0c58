// Host-side tests for blob geometry and camera math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/mesh.rs"]
mod mesh;

use mesh::*;

#[test]
fn icosahedron_has_the_classic_counts() {
    let m = icosphere(1.0, 0);
    assert_eq!(m.vertices.len(), 12);
    assert_eq!(m.indices.len(), 20 * 3);
}

#[test]
fn subdivision_vertex_count_follows_the_formula() {
    for n in 0..4u32 {
        let m = icosphere(1.0, n);
        let expected = 10 * 4usize.pow(n) + 2;
        assert_eq!(m.vertices.len(), expected, "subdivisions = {}", n);
        assert_eq!(m.indices.len(), 20 * 4usize.pow(n) * 3);
    }
}

#[test]
fn vertices_lie_on_the_sphere() {
    let radius = 1.8;
    let m = icosphere(radius, 3);
    for v in &m.vertices {
        let p = glam::Vec3::from_array(v.position);
        assert!((p.length() - radius).abs() < 1e-4);
    }
}

#[test]
fn normals_are_unit_and_radial() {
    let m = icosphere(2.5, 2);
    for v in &m.vertices {
        let n = glam::Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        let p = glam::Vec3::from_array(v.position);
        // radial: normal parallel to position
        assert!(n.dot(p.normalize()) > 0.999);
    }
}

#[test]
fn uvs_stay_in_unit_range() {
    let m = icosphere(1.0, 3);
    for v in &m.vertices {
        assert!(v.uv[0] >= 0.0 && v.uv[0] <= 1.0, "u = {}", v.uv[0]);
        assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0, "v = {}", v.uv[1]);
    }
}

#[test]
fn indices_reference_valid_vertices() {
    let m = icosphere(1.0, 2);
    let n = m.vertices.len() as u32;
    for &i in &m.indices {
        assert!(i < n);
    }
    // no degenerate triangles
    for tri in m.indices.chunks_exact(3) {
        assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
    }
}

#[test]
fn shared_edges_reuse_midpoints() {
    // 20 triangles share 30 edges; without the midpoint cache one
    // subdivision would mint 60 new vertices instead of 30.
    let m = icosphere(1.0, 1);
    assert_eq!(m.vertices.len(), 12 + 30);
}

#[test]
fn camera_centers_its_target() {
    let camera = Camera {
        eye: glam::Vec3::new(0.0, 0.0, 4.5),
        target: glam::Vec3::ZERO,
        up: glam::Vec3::Y,
        aspect: 1.0,
        fovy_radians: 75.0_f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    };
    let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn camera_projects_off_axis_points_off_center() {
    let camera = Camera {
        eye: glam::Vec3::new(0.0, 0.0, 4.5),
        target: glam::Vec3::ZERO,
        up: glam::Vec3::Y,
        aspect: 1.0,
        fovy_radians: 75.0_f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    };
    let clip = camera.view_projection() * glam::Vec4::new(0.0, 1.0, 0.0, 1.0);
    assert!(clip.y / clip.w > 0.0);
}
