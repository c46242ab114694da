use once_cell::sync::Lazy;

/// Set once from `PETPASS_DEBUG`; any value turns tracing on
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("PETPASS_DEBUG").is_ok());

pub fn debug_enabled() -> bool {
    *DEBUG_MODE
}

/// Trace line on stderr, tagged `[petpass]`, only when `PETPASS_DEBUG` is set
///
/// ```
/// petpass::debug_println!("loaded profile {}", "vienna");
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::utils::debug::debug_enabled() {
            eprintln!("[petpass] {}", format_args!($($arg)*));
        }
    };
}

pub use debug_println;
