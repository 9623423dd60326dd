//! Integration test modules.

mod demos;
mod host;
