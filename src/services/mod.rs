// src/services/mod.rs
pub mod calculations;
pub mod dashboard;
pub mod deals;
pub mod funding;
pub mod metrics;
pub mod pipeline;
pub mod projection;
pub mod team;
pub mod three_year;
pub mod validation;
