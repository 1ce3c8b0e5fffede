// Re-export glam for convenience
pub use glam::*;

// Beamburst math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::{reflect, Ray, EPSILON};
