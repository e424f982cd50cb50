//! FFI crate exposing TripMinder core use-cases to the UI shell.

pub mod api;
