//! Subprocess client for the external force-directed layout engine.
//!
//! The engine is an opaque oracle: it reads the graph on stdin in the same
//! `n m` / edge-pair grammar this tool accepts, computes a layout, and
//! prints one `x y` line per vertex. End-of-input is signaled by closing
//! the write side of the pipe; the engine reads until EOF before it starts
//! printing, so the whole exchange is a strict write-then-read sequence
//! with no interleaving.

use std::fmt::Write as _;
use std::io::{BufRead, BufReader, Write as _};
use std::process::{Child, Command, Stdio};

use springline_core::Graph;

use crate::geom::{Point, point};
use crate::{Error, Result};

/// The external executable to run, plus pass-through arguments.
///
/// Engines typically expose algorithm selection and iteration counts as
/// their own flags; callers forward those via [`EngineCommand::arg`]
/// without this crate interpreting them.
#[derive(Debug, Clone)]
pub struct EngineCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EngineCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Default for EngineCommand {
    fn default() -> Self {
        Self::new("force")
    }
}

/// Runs one engine process to compute coordinates for `graph`.
///
/// Spawns the engine with piped stdin/stdout (stderr is inherited, not
/// captured), writes the request, closes the pipe, reads exactly
/// `graph.vertex_count` coordinate lines and reaps the child. Exactly one
/// child per call; nothing is retried.
pub fn request_layout(command: &EngineCommand, graph: &Graph) -> Result<Vec<Point>> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: command.program.clone(),
            source,
        })?;
    tracing::debug!(
        program = %command.program,
        vertices = graph.vertex_count,
        edges = graph.edge_count(),
        "spawned layout engine"
    );

    write_request(&mut child, graph)?;
    let points = read_response(&mut child, graph.vertex_count)?;

    let status = child.wait().map_err(|source| Error::Wait { source })?;
    if !status.success() {
        return Err(Error::EngineExited { status });
    }
    tracing::debug!(vertices = points.len(), "layout engine finished");
    Ok(points)
}

fn write_request(child: &mut Child, graph: &Graph) -> Result<()> {
    let mut request = String::new();
    let _ = writeln!(
        &mut request,
        "{} {}",
        graph.vertex_count,
        graph.edge_count()
    );
    for edge in &graph.edges {
        match edge.weight {
            Some(weight) => {
                let _ = writeln!(&mut request, "{} {} {}", edge.source, edge.target, weight);
            }
            None => {
                let _ = writeln!(&mut request, "{} {}", edge.source, edge.target);
            }
        }
    }

    // Taking the handle drops it at the end of this scope, which closes the
    // pipe: that close is the end-of-input signal the engine blocks on.
    let mut stdin = child.stdin.take().expect("engine stdin was piped");
    stdin
        .write_all(request.as_bytes())
        .and_then(|()| stdin.flush())
        .map_err(|source| Error::Request { source })
}

fn read_response(child: &mut Child, expected: usize) -> Result<Vec<Point>> {
    let stdout = child.stdout.take().expect("engine stdout was piped");
    let mut reader = BufReader::new(stdout);

    let mut points = Vec::with_capacity(expected);
    let mut line = String::new();
    for vertex in 0..expected {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|source| Error::Response { source })?;
        if read == 0 {
            return Err(Error::ShortResponse {
                expected,
                got: vertex,
            });
        }
        points.push(parse_coordinate_line(vertex, &line)?);
    }
    Ok(points)
}

fn parse_coordinate_line(vertex: usize, line: &str) -> Result<Point> {
    let invalid = || Error::InvalidCoordinate {
        vertex,
        line: line.trim_end().to_string(),
    };

    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(invalid());
    };
    let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
        return Err(invalid());
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }
    Ok(point(x, y))
}
