//! Library surface of the impact-study CLI: logging setup and the staged
//! study pipeline, kept out of `main.rs` so integration tests can drive them
//! directly.

pub mod logging;
pub mod pipeline;
pub mod types;
