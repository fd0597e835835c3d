#![forbid(unsafe_code)]

//! Layout-engine subprocess client and SVG renderer.
//!
//! The force-directed layout itself lives in an external executable reached
//! over a stdin/stdout pipe ([`engine`]); this crate owns the wire protocol
//! and turns the returned coordinates into a node-link SVG ([`svg`]).

pub mod engine;
pub mod geom;
pub mod svg;

pub use engine::{EngineCommand, request_layout};
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to spawn layout engine `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to write layout request: {source}")]
    Request { source: std::io::Error },

    #[error("failed to read layout response: {source}")]
    Response { source: std::io::Error },

    #[error("layout response ends early: expected {expected} coordinate lines, got {got}")]
    ShortResponse { expected: usize, got: usize },

    #[error("invalid coordinate line for vertex {vertex}: {line:?}")]
    InvalidCoordinate { vertex: usize, line: String },

    #[error("failed to wait for layout engine: {source}")]
    Wait { source: std::io::Error },

    #[error("layout engine failed ({status})")]
    EngineExited { status: std::process::ExitStatus },

    #[error("layout has {got} coordinates for {expected} vertices")]
    CoordinateCountMismatch { expected: usize, got: usize },

    #[error("edge {edge} references vertex {vertex}, but the layout only covers 0..{vertex_count}")]
    EdgeEndpointOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
