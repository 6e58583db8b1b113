// Rust Scheduler Library
// Core of the monthly scheduling widget: grid generation, validation, presenter state

pub mod models;
pub mod presenter;
pub mod services;
pub mod utils;
