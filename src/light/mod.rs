pub mod emitter;

// Re-export public API
pub use emitter::*;
