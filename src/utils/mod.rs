pub mod debug;

pub use debug::{debug_enabled, DEBUG_MODE};
