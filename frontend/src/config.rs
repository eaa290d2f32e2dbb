use log::Level;

pub const PRODUCT_NAME: &str = "FakeBuster AI";

/// Pause before a demo analysis produces its result.
pub const SIMULATED_LATENCY_MS: u32 = 2000;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[cfg(debug_assertions)]
pub fn get_extension_url() -> &'static str {
    "/#cta"  // Stay on the local site while developing
}

#[cfg(not(debug_assertions))]
pub fn get_extension_url() -> &'static str {
    "https://chromewebstore.google.com/search/fakebuster"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_link_to_a_local_path() {
        assert!(get_extension_url().starts_with('/'));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_builds_link_to_the_store() {
        assert!(get_extension_url().starts_with("https://"));
    }
}
