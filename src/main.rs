#![allow(warnings)]
//! Birthday Page Entry Point

mod app;
mod audio;
mod components;
mod config;
mod context;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
