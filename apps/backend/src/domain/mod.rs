//! Domain layer: pure throw-sequence logic.

pub mod frames;

#[cfg(test)]
mod tests_frames;
#[cfg(test)]
mod tests_props_frames;

// Re-exports for ergonomics
pub use frames::{frames, MAX_PINS};
