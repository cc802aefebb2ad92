//! Graph export
//!
//! Renders a graph and its vertex/edge attributes as Graphviz Dot text.
//! Styling defaults come from an explicit [`DotConfig`] value.

pub mod config;
pub mod dot;

pub use config::DotConfig;
pub use dot::{to_dot, write_dot};
