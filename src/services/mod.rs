// src/services/mod.rs
pub mod validation;
pub mod valuation;
