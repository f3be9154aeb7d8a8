//! Component models for rotorsim, a multirotor performance modeling toolkit.

pub mod rotor;
