/// Tuning constants for the liquid field and blob interaction.
///
/// These express intended behavior (step sizes, thresholds, clamp limits)
/// and keep magic numbers out of the simulation and paint code.
// ---------------- Particle field ----------------

/// Fixed particle population per mounted canvas. Never changes after init.
pub const PARTICLE_COUNT: usize = 550;

/// Simulated-time increment per animation frame. The field runs on
/// simulated time, not wall-clock delta; frame-rate variance changes
/// apparent speed rather than being compensated for.
pub const TIME_STEP: f32 = 0.005;

// Per-frame advance of each particle's noise-field offsets
pub const NOISE_OFFSET_STEP: f32 = 0.002;

// Noise displacement scale in px, before the metallic gain
pub const NOISE_DISPLACEMENT_PX: f32 = 70.0;
pub const METALLIC_DISPLACEMENT_GAIN: f32 = 0.5;

// Secondary sinusoidal wave term, desynchronized by particle index
pub const WAVE_AMPLITUDE_PX: f32 = 20.0;
pub const WAVE_TIME_FACTOR: f32 = 0.2;
pub const WAVE_INDEX_OFFSET: f32 = 0.05;

// Base positions wrap toroidally inside an extended viewport margin
pub const WRAP_MARGIN_PX: f32 = 100.0;
pub const Z_WRAP_LIMIT: f32 = 3.0;

// Pointer repulsion
pub const POINTER_RADIUS_PX: f32 = 200.0;
pub const REPEL_FORCE: f32 = 0.4;
pub const REPEL_METALLIC_GAIN: f32 = 0.8;
pub const METALLIC_BOOST: f32 = 0.3;
pub const MORPH_SPEED_BOOST: f32 = 0.5;

/// Pointer is considered inactive after this long without a move event.
pub const POINTER_IDLE_TIMEOUT_MS: f64 = 4000.0;

// Connection topology rebuild cadence: frames where
// floor(time * CONNECTION_CLOCK_HZ) % CONNECTION_REBUILD_MODULO == 0
pub const CONNECTION_CLOCK_HZ: f32 = 30.0;
pub const CONNECTION_REBUILD_MODULO: i64 = 8;

// Phase-aligned pairs see a shorter effective distance
pub const FLOW_AFFINITY_DISCOUNT: f32 = 0.3;

// ---------------- Frame renderer ----------------

/// Hard cutoff: no connection is drawn beyond this planar distance.
pub const MAX_DRAW_DISTANCE_PX: f32 = 240.0;

// Quadratic-curve rendering kicks in past either of these
pub const CURVE_DISTANCE_THRESHOLD_PX: f32 = 160.0;
pub const CURVE_METALLIC_THRESHOLD: f32 = 0.65;

// Additive glow pass eligibility
pub const GLOW_METALLIC_THRESHOLD: f32 = 0.8;
pub const GLOW_DISTANCE_MAX_PX: f32 = 120.0;

pub const MAX_LINE_THICKNESS_PX: f32 = 3.5;
pub const TURBULENCE_AMPLITUDE_PX: f32 = 15.0;

// Partial-opacity background overwrite leaves a motion trail
pub const TRAIL_ALPHA: f32 = 0.3;
pub const TRAIL_GRAY_DARK: u8 = 17;
pub const TRAIL_GRAY_LIGHT: u8 = 245;

// ---------------- Blob hover state machine ----------------

/// Ramp-up per frame while the pointer is over the blob. Intentionally
/// faster than the decay so interaction settles rather than snapping.
pub const HOVER_RAMP_PER_FRAME: f32 = 0.05;
/// Decay per frame after the pointer leaves.
pub const HOVER_DECAY_PER_FRAME: f32 = 0.03;

// ---------------- Blob geometry and shading ----------------

pub const BLOB_RADIUS: f32 = 1.8;
pub const BLOB_SUBDIVISIONS: u32 = 5;

pub const BLOB_CAMERA_Z: f32 = 4.5;
pub const BLOB_FOV_DEGREES: f32 = 75.0;

// Static artistic tilt applied to the mesh
pub const BLOB_TILT_X: f32 = 0.1;
pub const BLOB_TILT_Z: f32 = 0.1;

pub const BLOB_NOISE_STRENGTH: f32 = 0.5;
pub const BLOB_FLOW_SPEED: f32 = 0.3;
pub const BLOB_GLOW_INTENSITY: f32 = 1.8;

// Shimmer post pass (film-grain-like overlay on the blob render)
pub const SHIMMER_AMOUNT: f32 = 0.08;
pub const SHIMMER_SPEED: f32 = 0.3;

// ---------------- Ambient audio ----------------

/// Analyser FFT size for the optional ambient audio intensity signal.
pub const ANALYSER_FFT_SIZE: u32 = 64;
