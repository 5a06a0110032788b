#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod catalog;
mod config;
mod lightbox;
mod logging;
mod overlay;
mod scroll_spy;
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This site renders in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
