//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `giftwise_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: a tiny probe validates core crate wiring without dragging in any
    // UI host setup.
    println!("giftwise_core ping={}", giftwise_core::ping());
    println!("giftwise_core version={}", giftwise_core::core_version());
    println!(
        "giftwise_core default_log_level={}",
        giftwise_core::default_log_level()
    );
}
