#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod countdown;
mod error;
mod filter;
mod menu;
mod notify;
mod preloader;
mod scroll;
mod starfield;
mod stats;

#[cfg(target_arch = "wasm32")]
mod frontend;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
