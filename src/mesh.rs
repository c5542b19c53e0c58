//! Blob geometry: a subdivided icosahedron with per-vertex normals and
//! spherical UVs, plus the fixed camera the blob is framed with.

use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

/// Vertex layout shared with `shaders/blob.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct BlobMesh {
    pub vertices: Vec<BlobVertex>,
    pub indices: Vec<u32>,
}

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Build an icosphere of the given radius. `subdivisions` quadruples the
/// triangle count per level; vertex count is `10 * 4^n + 2`.
pub fn icosphere(radius: f32, subdivisions: u32) -> BlobMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let mut positions: Vec<Vec3> = vec![
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|v| v.normalize())
    .collect();

    let mut indices: Vec<u32> = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
        1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
        3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
        4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
    ];

    for _ in 0..subdivisions {
        let mut midpoint_cache: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next_indices = Vec::with_capacity(indices.len() * 4);
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let ab = midpoint(&mut positions, &mut midpoint_cache, a, b);
            let bc = midpoint(&mut positions, &mut midpoint_cache, b, c);
            let ca = midpoint(&mut positions, &mut midpoint_cache, c, a);
            next_indices.extend_from_slice(&[a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
        }
        indices = next_indices;
    }

    let vertices = positions
        .iter()
        .map(|&unit| {
            let p = unit * radius;
            BlobVertex {
                position: p.to_array(),
                normal: unit.to_array(),
                uv: [
                    0.5 + unit.z.atan2(unit.x) / std::f32::consts::TAU,
                    0.5 - unit.y.asin() / std::f32::consts::PI,
                ],
            }
        })
        .collect();

    BlobMesh { vertices, indices }
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let mid = ((positions[a as usize] + positions[b as usize]) / 2.0).normalize();
    let i = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, i);
    i
}
