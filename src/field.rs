//! Particle field simulator: owns the liquid points and advances them
//! deterministically from one tick to the next.
//!
//! The field is driven by simulated time (`TIME_STEP` per tick) and a
//! pointer sample; it never allocates or frees particles after init.

use crate::color::{self, GrayColor};
use crate::constants::*;
use crate::noise;
use rand::prelude::*;
use smallvec::SmallVec;

/// One simulated particle. Current position is base position plus noise
/// and pointer displacement, recomputed every tick; only the base drifts.
#[derive(Clone, Debug)]
pub struct LiquidPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub base_x: f32,
    pub base_y: f32,
    pub base_z: f32,
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    pub size: f32,
    pub opacity: f32,
    pub color: GrayColor,
    /// CSS form of `color`, rendered once at creation.
    pub css: String,
    pub connections: SmallVec<[usize; 8]>,
    pub noise_offset_x: f32,
    pub noise_offset_y: f32,
    pub noise_offset_z: f32,
    pub morph_phase: f32,
    pub morph_speed: f32,
    pub distort_strength: f32,
    pub metallic: f32,
}

/// Per-page engine parameters. The two presets mirror the two mounted
/// canvases, which had drifted apart before being folded into one engine.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub connection_threshold: f32,
    /// Max connections per particle = floor(2 + metallic * factor).
    pub connection_factor: f32,
}

impl FieldParams {
    /// Landing-page variant: tight threshold, sparse links.
    pub fn home() -> Self {
        FieldParams {
            particle_count: PARTICLE_COUNT,
            connection_threshold: 160.0,
            connection_factor: 3.0,
        }
    }

    /// Gallery variant: wide threshold, denser links.
    pub fn gallery() -> Self {
        FieldParams {
            particle_count: PARTICLE_COUNT,
            connection_threshold: 240.0,
            connection_factor: 6.0,
        }
    }
}

/// A pointer position in canvas pixels plus its activity flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Tracks pointer-move recency. The pointer counts as active until
/// `POINTER_IDLE_TIMEOUT_MS` elapse without a move event.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    pub x: f32,
    pub y: f32,
    last_move_ms: f64,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker {
            x: 0.0,
            y: 0.0,
            last_move_ms: f64::NEG_INFINITY,
        }
    }

    pub fn record_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.x = x;
        self.y = y;
        self.last_move_ms = now_ms;
    }

    pub fn sample(&self, now_ms: f64) -> PointerSample {
        PointerSample {
            x: self.x,
            y: self.y,
            active: now_ms - self.last_move_ms < POINTER_IDLE_TIMEOUT_MS,
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable particle field for one canvas.
pub struct LiquidField {
    pub params: FieldParams,
    pub width: f32,
    pub height: f32,
    pub time: f32,
    pub dark_mode: bool,
    pub points: Vec<LiquidPoint>,
}

impl LiquidField {
    /// Seed-stable init over the given canvas dimensions. Theme is
    /// captured here: particle colors are not rewritten if the theme
    /// changes later (inherited behavior the visual design relies on).
    pub fn new(params: FieldParams, width: f32, height: f32, dark_mode: bool, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(params.particle_count);
        for _ in 0..params.particle_count {
            let z = rng.gen::<f32>() * 5.0 - 2.5;
            let x = rng.gen::<f32>() * width;
            let y = rng.gen::<f32>() * height;
            let depth = (z + 2.5) / 5.0;

            let base = color::base_gray(dark_mode, rng.gen::<f32>());
            let metallic = 0.3 + rng.gen::<f32>() * 0.7;
            let opacity = 0.2 + depth * 0.75;
            let gray = color::grayscale(base, opacity, metallic, dark_mode);

            points.push(LiquidPoint {
                x,
                y,
                z,
                base_x: x,
                base_y: y,
                base_z: z,
                vx: (rng.gen::<f32>() - 0.5) * 0.15,
                vy: (rng.gen::<f32>() - 0.5) * 0.15,
                vz: (rng.gen::<f32>() - 0.5) * 0.05,
                size: 1.5 + depth * 2.5 + rng.gen::<f32>() * 1.5,
                opacity,
                css: gray.css(),
                color: gray,
                connections: SmallVec::new(),
                noise_offset_x: rng.gen::<f32>() * 1000.0,
                noise_offset_y: rng.gen::<f32>() * 1000.0,
                noise_offset_z: rng.gen::<f32>() * 1000.0,
                morph_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                morph_speed: 0.01 + rng.gen::<f32>() * 0.03,
                distort_strength: 0.2 + rng.gen::<f32>() * 0.6,
                metallic,
            });
        }
        LiquidField {
            params,
            width,
            height,
            time: 0.0,
            dark_mode,
            points,
        }
    }

    /// Max connection count for a particle with the given metallic weight.
    pub fn max_connections(&self, metallic: f32) -> usize {
        (2.0 + metallic * self.params.connection_factor).floor() as usize
    }

    /// Advance one tick: simulated time, morph phases, noise scroll,
    /// base drift with toroidal wrap, pointer repulsion, and (on due
    /// frames) a wholesale connection-graph rebuild.
    pub fn step(&mut self, pointer: PointerSample) {
        self.time += TIME_STEP;
        let time = self.time;

        if self.connections_due() {
            self.rebuild_connections();
        }

        let width = self.width;
        let height = self.height;
        for (index, p) in self.points.iter_mut().enumerate() {
            p.morph_phase += p.morph_speed;

            p.noise_offset_x += NOISE_OFFSET_STEP;
            p.noise_offset_y += NOISE_OFFSET_STEP;
            p.noise_offset_z += NOISE_OFFSET_STEP;

            let n = noise::liquid_noise(
                p.noise_offset_x * 100.0,
                p.noise_offset_y * 100.0,
                p.noise_offset_z * 100.0,
                time,
                p.distort_strength,
            );

            let gain = NOISE_DISPLACEMENT_PX * (1.0 + p.metallic * METALLIC_DISPLACEMENT_GAIN);
            let wave_t = time * WAVE_TIME_FACTOR;
            let wave_i = index as f32 * WAVE_INDEX_OFFSET;
            p.x = p.base_x
                + n.nx * gain
                + (wave_t + wave_i).sin() * WAVE_AMPLITUDE_PX * p.distort_strength;
            p.y = p.base_y
                + n.ny * gain
                + (wave_t + wave_i * 1.5).cos() * WAVE_AMPLITUDE_PX * p.distort_strength;
            p.z = p.base_z + n.nz * 3.0;

            p.base_x += p.vx;
            p.base_y += p.vy;
            p.base_z += p.vz;

            if p.base_x < -WRAP_MARGIN_PX {
                p.base_x = width + WRAP_MARGIN_PX;
            }
            if p.base_x > width + WRAP_MARGIN_PX {
                p.base_x = -WRAP_MARGIN_PX;
            }
            if p.base_y < -WRAP_MARGIN_PX {
                p.base_y = height + WRAP_MARGIN_PX;
            }
            if p.base_y > height + WRAP_MARGIN_PX {
                p.base_y = -WRAP_MARGIN_PX;
            }
            if p.base_z < -Z_WRAP_LIMIT {
                p.base_z = Z_WRAP_LIMIT;
            }
            if p.base_z > Z_WRAP_LIMIT {
                p.base_z = -Z_WRAP_LIMIT;
            }

            if pointer.active {
                let dx = pointer.x - p.x;
                let dy = pointer.y - p.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < POINTER_RADIUS_PX {
                    let intensity = 1.0 - dist / POINTER_RADIUS_PX;
                    let repel = REPEL_FORCE * intensity * (1.0 + p.metallic * REPEL_METALLIC_GAIN);
                    p.x -= dx * repel;
                    p.y -= dy * repel;

                    // One-way ratchet: repeated pointer visits saturate
                    // metallic and morph speed; nothing lowers them back.
                    p.metallic = (p.metallic + intensity * METALLIC_BOOST).min(1.0);
                    p.morph_speed *= 1.0 + intensity * MORPH_SPEED_BOOST;
                }
            }
        }
    }

    /// Amortization gate for topology rebuilds, not a fixed-rate timer.
    fn connections_due(&self) -> bool {
        (self.time * CONNECTION_CLOCK_HZ).floor() as i64 % CONNECTION_REBUILD_MODULO == 0
    }

    /// Recompute every particle's connection list from scratch. O(N^2)
    /// over the full population; candidates are discounted by flow
    /// affinity so phase-aligned particles link up preferentially.
    pub fn rebuild_connections(&mut self) {
        let threshold = self.params.connection_threshold;
        let n = self.points.len();
        let mut nearby: Vec<(f32, usize)> = Vec::new();
        for i in 0..n {
            nearby.clear();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let a = &self.points[i];
                let b = &self.points[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dz = a.z - b.z;
                let dist = (dx * dx + dy * dy + dz * dz).sqrt();
                let flow_affinity = (a.morph_phase - b.morph_phase).sin().abs();
                let effective = dist * (1.0 - flow_affinity * FLOW_AFFINITY_DISCOUNT);
                if effective < threshold {
                    nearby.push((effective, j));
                }
            }
            nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
            let cap = self.max_connections(self.points[i].metallic).min(8);
            let conns: SmallVec<[usize; 8]> =
                nearby.iter().take(cap).map(|&(_, j)| j).collect();
            self.points[i].connections = conns;
        }
    }

    /// Resize handling: rescale base positions into the new dimensions
    /// rather than recreating the population.
    pub fn rescale(&mut self, new_width: f32, new_height: f32) {
        if new_width <= 0.0 || new_height <= 0.0 {
            return;
        }
        let sx = new_width / self.width;
        let sy = new_height / self.height;
        for p in &mut self.points {
            p.base_x *= sx;
            p.base_y *= sy;
        }
        self.width = new_width;
        self.height = new_height;
    }
}
