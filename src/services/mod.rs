// Service module exports

pub mod data_loader;
pub mod session;
pub mod settings;
