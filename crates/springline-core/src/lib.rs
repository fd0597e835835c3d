#![forbid(unsafe_code)]

//! Edge-list graph model for the springline pipeline.
//!
//! Vertices are the implicit indices `0..n`; edges are ordered pairs of
//! indices with an optional weight. The parser accepts the same
//! whitespace-token grammar the layout engine reads on its own stdin, so a
//! parsed [`Graph`] can be relayed to the engine verbatim.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, ParseOptions};
