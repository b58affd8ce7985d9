//! Wisest - Decision Support Backend
//!
//! This crate scores weighted multi-criteria decisions (normalization,
//! importance²-weighted aggregation, derived analytical views) and
//! augments the result with AI-generated feedback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
