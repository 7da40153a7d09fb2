// src/core/mod.rs

pub mod content;
pub mod engine;
pub mod localized;
pub mod rules;
pub mod types;
