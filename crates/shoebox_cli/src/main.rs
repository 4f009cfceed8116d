//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shoebox_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use shoebox_core::StoreConfig;

fn main() {
    let config = StoreConfig::default();
    println!("shoebox_core version={}", shoebox_core::core_version());
    println!(
        "shoebox_core default_store={} max_size_mib={}",
        config.path.display(),
        config.max_size_mib
    );
}
