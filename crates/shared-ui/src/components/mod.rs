// Standalone components
pub mod badge;
pub mod button;
pub mod empty_state;
pub mod external_link;

// Layout
pub mod panel;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use empty_state::*;
pub use external_link::*;
pub use panel::*;
