//! Utility functions module
//! 
//! Helpers shared by the binary, currently just signal handling.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
