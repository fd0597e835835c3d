use serde::Serialize;
use springline_core::{Graph, ParseOptions};
use springline_render::geom::Point;
use springline_render::{EngineCommand, SvgRenderOptions, render_svg, request_layout};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(springline_core::Error),
    Render(springline_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<springline_core::Error> for CliError {
    fn from(value: springline_core::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<springline_render::Error> for CliError {
    fn from(value: springline_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Layout,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    engine: String,
    engine_args: Vec<String>,
    weighted: bool,
    pretty: bool,
    width: f64,
    height: f64,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Render,
            input: None,
            engine: "force".to_string(),
            engine_args: Vec::new(),
            weighted: false,
            pretty: false,
            width: 440.0,
            height: 440.0,
            out: None,
        }
    }
}

/// One vertex position in `layout` JSON output, in vertex-index order.
#[derive(Serialize)]
struct PositionOut {
    x: f64,
    y: f64,
}

fn usage() -> &'static str {
    "springline-cli\n\
\n\
USAGE:\n\
  springline-cli [render] [--engine <program>] [--engine-arg <arg>]... [--weighted] [--width <px>] [--height <px>] [--out <path>] [<path>|-]\n\
  springline-cli layout [--pretty] [--engine <program>] [--engine-arg <arg>]... [--weighted] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is an edge list: an `n m` header, then m edges `u v` (or `u v w` with --weighted).\n\
  - render prints an SVG document to stdout by default; use --out to write a file.\n\
  - layout prints the computed coordinates as a JSON array instead of rendering.\n\
  - --engine names the external layout executable (default: force); --engine-arg\n\
    is repeatable and forwarded to it verbatim.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "layout" => args.command = Command::Layout,
            "--weighted" => args.weighted = true,
            "--pretty" => args.pretty = true,
            "--engine" => {
                let Some(engine) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.engine = engine.clone();
            }
            "--engine-arg" => {
                let Some(arg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.engine_args.push(arg.clone());
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.width.is_finite() && args.width > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.height.is_finite() && args.height > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = Graph::parse(
        &text,
        ParseOptions {
            weighted: args.weighted,
        },
    )?;

    let mut engine = EngineCommand::new(args.engine.as_str());
    for arg in &args.engine_args {
        engine = engine.arg(arg.as_str());
    }
    let layout: Vec<Point> = request_layout(&engine, &graph)?;

    match args.command {
        Command::Layout => {
            let positions: Vec<PositionOut> = layout
                .iter()
                .map(|p| PositionOut { x: p.x, y: p.y })
                .collect();
            write_json(&positions, args.pretty)
        }
        Command::Render => {
            let options = SvgRenderOptions {
                width: args.width,
                height: args.height,
                ..Default::default()
            };
            let svg = render_svg(&graph, &layout, &options)?;
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
