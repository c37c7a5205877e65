//! Parameter definitions with physical units and documented semantics.
//!
//! Every constant used by the simulation and the renderer lives here:
//! - Physical units (meters, seconds, radians, etc.)
//! - Documented meanings
//! - One place to change a value for both CPU and GPU

mod camera;
mod render;
mod ship;
mod wave;

// Re-export all types
pub use camera::FixedCamera;
pub use render::RenderConfig;
pub use ship::ShipPhysics;
pub use wave::WaveParams;
