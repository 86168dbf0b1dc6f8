pub mod components;
pub mod resources;
pub mod systems;
pub mod plugin;

// Re-export public API
pub use components::*;
pub use resources::*;
pub use systems::*;
pub use plugin::*;
