//! Models shared between the binary and the HTTP layer.

pub mod config;
