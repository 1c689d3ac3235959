//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! each suite pulls this module in with `mod support;` and uses the parts it
//! needs.

#![allow(dead_code)]

pub mod app;
