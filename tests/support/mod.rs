// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod helpers;
pub mod mocks;
