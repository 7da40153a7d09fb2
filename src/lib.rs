// src/lib.rs

pub mod core;
pub mod conversation;
pub mod persistence;
pub mod config;
pub mod error;
pub mod logging;
pub mod c_api;
pub use crate::conversation::Conversation;
pub use crate::core::engine::{select_response, MentorEngine};
pub use crate::error::MentorError;
