//! Task Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Errors only if a subscriber is already installed
    let _ = console_logger::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
