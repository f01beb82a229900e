/// Timeline Popup - browser extension for posting timeline events
/// Built with Rust + WASM + Yew

mod api;
mod category;
mod config;
mod controller;
mod error;
mod event;
mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
