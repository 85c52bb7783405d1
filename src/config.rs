use log::Level;

/// Header switches to its scrolled look past this many pixels.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const DEFAULT_VARIANT: &str = "solo";

/// Page variant baked in at build time, e.g. `STUDIO_VARIANT=bento trunk build`.
pub fn page_variant() -> &'static str {
    match option_env!("STUDIO_VARIANT") {
        Some(variant) if !variant.trim().is_empty() => variant,
        _ => DEFAULT_VARIANT,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
