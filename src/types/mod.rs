//! Common types used across the bitFlyer client library.

pub mod common;

pub use common::*;
