// src/handlers/mod.rs
pub mod dashboard;
pub mod error;
pub mod funding;
pub mod metrics;
pub mod pipeline;
