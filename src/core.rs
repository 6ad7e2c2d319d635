// src/core.rs
pub mod emit;
pub mod loader;
pub mod ranking;
pub mod resolver;
pub mod schema;
