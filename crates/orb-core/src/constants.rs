// Shared tuning constants for the orb simulation and scene layout.

// Pointer energy
pub const POINTER_SCALE_SHIELD: f32 = 0.0002; // spin added per pixel of pointer travel
pub const POINTER_SCALE_THRESHOLD: f32 = 0.0005;

// Spin
pub const FRICTION: f32 = 0.95; // per-frame velocity multiplier
pub const IDLE_ROTATION: f32 = 0.003; // rad/frame around the group Y axis
pub const TILT_FACTOR_SHIELD: f32 = 0.5; // share of spin applied to the X axis

// Shield health
pub const HEALTH_MAX: f32 = 100.0;
pub const HEALTH_CRITICAL: f32 = 30.0; // below this the HUD bar turns red
pub const DRAIN_ABOVE: f32 = 0.1; // |spin| that starts draining health
pub const DRAIN_PER_TICK: f32 = 0.5;
pub const REGEN_BELOW: f32 = 0.01; // |spin| under which health recovers
pub const REGEN_PER_TICK: f32 = 0.2;

// One-shot reveal threshold
pub const REVEAL_VELOCITY: f32 = 0.15;

// Shell visuals at full health
pub const GAS_OPACITY: f32 = 0.6;
pub const GAS_OUTER_OPACITY: f32 = 0.3;
pub const AURA_C: f32 = 0.5;
pub const AURA_P: f32 = 3.0;

// Core motion
pub const CORE_SPIN: [f32; 2] = [0.01, 0.02]; // rad/frame on (x, y)
pub const CORE_HIDDEN_SCALE: f32 = 0.1;
pub const CORE_REVEAL_SECS: f32 = 1.0;
pub const CORE_PULSE_SCALE: f32 = 1.5;
pub const CORE_PULSE_SECS: f32 = 0.2; // each way

// Scene layout
pub const CORE_RADIUS: f32 = 1.2;
pub const CORE_DETAIL: u32 = 1;
pub const CAGE_RADIUS: f32 = 1.4;
pub const CAGE_DETAIL: u32 = 0;
pub const GAS_RADIUS: f32 = 3.5;
pub const GAS_OUTER_RADIUS: f32 = 3.6;
pub const AURA_RADIUS: f32 = 3.8;
pub const SPHERE_SEGMENTS: u32 = 32;

// Camera
pub const CAMERA_Z: f32 = 12.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Procedural gas texture
pub const CLOUD_TEXTURE_SIZE: u32 = 128;
pub const CLOUD_ALPHA_CUT: u8 = 100;

// Hero fade-in
pub const FADE_IN_DELAY_SECS: f32 = 0.5;
pub const FADE_IN_STAGGER_SECS: f32 = 0.2;
pub const FADE_IN_SECS: f32 = 1.0;
pub const FADE_IN_OFFSET_PX: f32 = 30.0;

// Project card tilt
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SPEED_MS: u32 = 400;
pub const TILT_MAX_GLARE: f32 = 0.2;
