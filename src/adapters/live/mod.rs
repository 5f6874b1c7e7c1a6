//! Live adapters that talk to real external systems.

pub mod chrome;
