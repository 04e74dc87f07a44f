// src/models/mod.rs

pub mod pageview;
pub mod student;
