// src/handlers/mod.rs

pub mod pageview;
pub mod questions;
pub mod score;
