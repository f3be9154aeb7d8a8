//! Shared fixtures for rotorsim integration tests.

pub mod airframe;
