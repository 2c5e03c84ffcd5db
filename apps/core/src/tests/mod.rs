//! Test Module
//!
//! Cross-module suites for MindCare core.
//!
//! ## Test Categories
//! - `brain_tests`: Classification, risk scan and responder properties
//! - `education_tests`: Band coverage and educational lookups
//! - `integration_tests`: End-to-end scenarios and wire format

pub mod brain_tests;
pub mod education_tests;
