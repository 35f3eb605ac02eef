pub mod draw;
pub mod instrument;
pub mod layout;
pub mod plot_configs;

// Re-export everything for convenience
pub use draw::*;
pub use instrument::*;
pub use layout::*;
pub use plot_configs::*;
