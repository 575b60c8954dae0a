#![allow(warnings)]
//! Todo App Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod error;
mod error_bus;
mod models;
mod schemas;
mod session;
mod storage;
mod theme;
mod todos;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
