//! Drives `request_layout` against small fake engines implemented as shell
//! one-liners. The fakes read all of stdin before printing, so they also
//! exercise the close-write end-of-input signal: a request that is never
//! terminated would hang them forever.

use springline_core::{Graph, ParseOptions};
use springline_render::geom::point;
use springline_render::{EngineCommand, Error, request_layout};

fn shell_engine(script: &str) -> EngineCommand {
    EngineCommand::new("sh").arg("-c").arg(script)
}

fn graph(text: &str) -> Graph {
    Graph::parse(text, ParseOptions::default()).unwrap()
}

#[test]
fn reads_one_coordinate_line_per_vertex() {
    let engine = shell_engine(
        "awk 'NR == 1 { n = $1 } END { for (i = 0; i < n; i++) print i * 10, i * 5 }'",
    );
    let points = request_layout(&engine, &graph("3 1\n0 1\n")).unwrap();
    assert_eq!(
        points,
        vec![point(0.0, 0.0), point(10.0, 5.0), point(20.0, 10.0)]
    );
}

#[test]
fn relays_the_full_edge_list_before_closing_the_pipe() {
    // The fake engine fails unless it saw exactly `m` edge lines after the
    // header, and it only reaches END once our write side is closed.
    let engine = shell_engine(
        "awk 'NR == 1 { n = $1; m = $2; next } { seen++ } \
         END { if (seen != m) exit 1; for (i = 0; i < n; i++) print seen, i }'",
    );
    let points = request_layout(&engine, &graph("2 3\n0 1\n1 0\n1 1\n")).unwrap();
    assert_eq!(points, vec![point(3.0, 0.0), point(3.0, 1.0)]);
}

#[test]
fn weighted_edges_are_written_as_three_columns() {
    let engine = shell_engine(
        "awk 'NR == 1 { n = $1; next } NF != 3 { bad = 1 } \
         END { if (bad) exit 1; for (i = 0; i < n; i++) print 0, 0 }'",
    );
    let g = Graph::parse("2 1\n0 1 2.5\n", ParseOptions { weighted: true }).unwrap();
    let points = request_layout(&engine, &g).unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn an_empty_graph_needs_no_response_lines() {
    let engine = shell_engine("cat > /dev/null");
    let points = request_layout(&engine, &graph("0 0\n")).unwrap();
    assert!(points.is_empty());
}

#[test]
fn a_missing_executable_is_a_spawn_error() {
    let engine = EngineCommand::new("springline-no-such-engine");
    let err = request_layout(&engine, &graph("1 0\n")).unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
}

#[test]
fn a_short_response_reports_how_far_it_got() {
    let engine = shell_engine("awk 'NR == 1 { n = $1 } END { for (i = 0; i < n - 1; i++) print i, i }'");
    let err = request_layout(&engine, &graph("3 0\n")).unwrap_err();
    assert!(matches!(
        err,
        Error::ShortResponse {
            expected: 3,
            got: 2
        }
    ));
}

#[test]
fn a_malformed_coordinate_line_names_its_vertex() {
    let engine = shell_engine("cat > /dev/null; echo '0 0'; echo 'x y'");
    let err = request_layout(&engine, &graph("2 0\n")).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { vertex: 1, .. }));
}

#[test]
fn a_coordinate_line_with_one_token_is_malformed() {
    let engine = shell_engine("cat > /dev/null; echo '42'");
    let err = request_layout(&engine, &graph("1 0\n")).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { vertex: 0, .. }));
}

#[test]
fn a_failing_engine_surfaces_its_exit_status() {
    // Consumes the request first so the failure is the exit status, not a
    // broken pipe on our write.
    let engine = shell_engine("cat > /dev/null; exit 3");
    let err = request_layout(&engine, &graph("0 0\n")).unwrap_err();
    match err {
        Error::EngineExited { status } => assert_eq!(status.code(), Some(3)),
        other => panic!("expected EngineExited, got {other:?}"),
    }
}

#[test]
fn an_engine_that_rejects_the_graph_reads_as_a_short_response() {
    // Engines that bounds-check endpoints exit without printing anything;
    // from this side that is a truncated response for any n > 0.
    let engine = shell_engine("cat > /dev/null; exit 2");
    let err = request_layout(&engine, &graph("4 5\n0 1\n1 2\n0 2\n0 3\n0 4\n")).unwrap_err();
    assert!(matches!(
        err,
        Error::ShortResponse {
            expected: 4,
            got: 0
        }
    ));
}
