//! Shared helpers for the integration tests.
//!
//! Each test binary pulls in only what it needs, so some helpers look unused
//! from any single binary.

#![allow(dead_code)]

pub mod fixtures;
pub mod http_mock;
