pub mod config;
pub mod error;
pub mod controller;
pub mod components;
pub mod events;
pub mod systems;
pub mod plugin;

// Re-export public API
pub use config::*;
pub use error::*;
pub use controller::*;
pub use components::*;
pub use events::*;
pub use systems::*;
pub use plugin::*;
