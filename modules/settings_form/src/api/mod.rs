//! API layer - native and REST surfaces

pub mod native;
pub mod rest;
