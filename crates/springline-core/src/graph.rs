use crate::{Error, Result};

/// One edge of the input graph.
///
/// Endpoints are vertex indices as read from the input. They are not
/// bounds-checked here: an index outside `0..n` is relayed to the layout
/// engine uninterpreted, and whatever the engine does with it (typically a
/// refusal) is surfaced by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Present only when the input was parsed in weighted mode.
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// When true, every edge carries a third token: a non-negative weight.
    ///
    /// This matches the input grammar of energy-based layout engines that
    /// take per-edge target lengths; the plain force engines ignore weights
    /// and read bare pairs.
    pub weighted: bool,
}

/// An immutable vertex-indexed graph: `vertex_count` implicit vertices
/// `0..n` and an ordered edge list.
///
/// Edge order is preserved because it determines draw order downstream.
/// Duplicate edges and self-loops are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Parses the `n m` header followed by `m` edge token groups.
    ///
    /// The grammar is token-oriented: line boundaries count as ordinary
    /// whitespace, exactly as the layout engine's own reader treats them.
    /// Tokens after the final edge are ignored.
    pub fn parse(text: &str, options: ParseOptions) -> Result<Graph> {
        let mut tokens = text.split_whitespace();

        let vertex_count = parse_count(tokens.next(), "vertex")?;
        let edge_count = parse_count(tokens.next(), "edge")?;

        let mut edges = Vec::with_capacity(edge_count);
        for edge in 0..edge_count {
            let source = parse_endpoint(tokens.next(), edge, edge_count, edges.len())?;
            let target = parse_endpoint(tokens.next(), edge, edge_count, edges.len())?;
            let weight = if options.weighted {
                Some(parse_weight(tokens.next(), edge, edge_count, edges.len())?)
            } else {
                None
            };
            edges.push(Edge {
                source,
                target,
                weight,
            });
        }

        Ok(Graph {
            vertex_count,
            edges,
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn parse_count(token: Option<&str>, what: &'static str) -> Result<usize> {
    let Some(token) = token else {
        return Err(Error::MissingHeader);
    };
    token.parse::<usize>().map_err(|_| Error::InvalidCount {
        what,
        token: token.to_string(),
    })
}

fn parse_endpoint(
    token: Option<&str>,
    edge: usize,
    expected: usize,
    found: usize,
) -> Result<usize> {
    let Some(token) = token else {
        return Err(Error::TruncatedEdgeList { expected, found });
    };
    token.parse::<usize>().map_err(|_| Error::InvalidEndpoint {
        edge,
        token: token.to_string(),
    })
}

fn parse_weight(token: Option<&str>, edge: usize, expected: usize, found: usize) -> Result<f64> {
    let Some(token) = token else {
        return Err(Error::TruncatedEdgeList { expected, found });
    };
    let weight = token.parse::<f64>().map_err(|_| Error::InvalidWeight {
        edge,
        token: token.to_string(),
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight {
            edge,
            token: token.to_string(),
        });
    }
    Ok(weight)
}
