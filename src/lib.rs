// src/lib.rs

// Re-export or define the top-level modules you need
pub mod models;
pub mod render;
pub mod services;
