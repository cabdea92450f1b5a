//! Helpers for processing request data before it reaches the `Router`.

pub mod http;
