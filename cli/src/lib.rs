#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Validated rosters of the U.S. Congress.
//!
//! Records are built from two public feeds, the `@unitedstates` JSON roster
//! ([`unitedstates`]) and the senate.gov XML contact list ([`senate`]). Every
//! field is checked and normalized by the validators in `ao_validators` as it
//! is assigned, so a record that exists is a valid record.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod records;
pub mod report;
pub mod senate;
pub mod unitedstates;
