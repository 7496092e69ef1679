pub use orb_core::*;

// Shaders bundled as string constants
pub static ORB_WGSL: &str = include_str!("../../shaders/orb.wgsl");
