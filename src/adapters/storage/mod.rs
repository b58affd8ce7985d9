//! Storage Adapters
//!
//! Implementations of the DecisionRepository port.

mod in_memory_repository;

pub use in_memory_repository::InMemoryDecisionRepository;
