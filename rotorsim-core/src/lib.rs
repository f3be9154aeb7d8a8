//! Core traits and unit types for rotorsim.

mod component;

pub mod units;

pub use component::Component;
