//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tripminder_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("tripminder_core ping={}", tripminder_core::ping());
    println!("tripminder_core version={}", tripminder_core::core_version());
}
