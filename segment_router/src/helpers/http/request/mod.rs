//! Helpers for the request side of routing.

pub mod path;
