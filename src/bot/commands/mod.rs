//! Discord command implementations organized by category.

/// UID registration and account management commands
pub mod account;
/// Build-cost estimation commands
pub mod build;
/// Character fetch/cache commands
pub mod character;
/// General utility commands
pub mod general;
/// Player profile commands
pub mod player;
/// Shared formatting helpers
pub mod util;

// Export commands
pub use account::*;
pub use build::*;
pub use character::*;
pub use general::*;
pub use player::*;
