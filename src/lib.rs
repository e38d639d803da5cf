// Year Glance library
// Exports all modules for testing and reuse

pub mod canvas;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
