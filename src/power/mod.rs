pub mod components;
pub mod events;
pub mod systems;
pub mod plugin;

// Re-export public API
pub use components::*;
pub use events::*;
pub use systems::*;
pub use plugin::*;
