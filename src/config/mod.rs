pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::{DEFAULT_CONFIG, DEFAULT_MAX_PET_COUNT};
pub use loader::ConfigLoader;
pub use types::*;
