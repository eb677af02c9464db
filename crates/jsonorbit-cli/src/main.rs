use jsonorbit_core::{
    LayoutConfig, build_virtual_tree, layout_json_map, measure_tree, position_tree,
};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    InvalidInput(serde_json::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::InvalidInput(err) => write!(f, "invalid JSON input: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    /// Print the flattened node/edge graph (the renderer contract).
    #[default]
    Graph,
    /// Print the measured, positioned virtual tree (an inspection surface).
    Tree,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    x_spacing: Option<f64>,
    y_spacing: Option<f64>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "jsonorbit-cli\n\
\n\
USAGE:\n\
  jsonorbit-cli [graph] [--pretty] [--x-spacing <n>] [--y-spacing <n>] [--out <path>] [<path>|-]\n\
  jsonorbit-cli tree [--pretty] [--x-spacing <n>] [--y-spacing <n>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - graph prints the flattened {nodes, edges, bounds} layout (compact by default).\n\
  - tree prints the measured, positioned virtual tree instead.\n\
  - Input must be a single JSON value; anything else is reported as an\n\
    advisory error without producing output.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "graph" => args.command = Command::Graph,
            "tree" => args.command = Command::Tree,
            "--pretty" => args.pretty = true,
            "--x-spacing" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.x_spacing = Some(parse_spacing(n)?);
            }
            "--y-spacing" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.y_spacing = Some(parse_spacing(n)?);
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
                while it.next().is_some() {
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

fn parse_spacing(raw: &str) -> Result<f64, CliError> {
    let n = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(n.is_finite() && n >= 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(n)
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

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => Ok(std::fs::write(path, text)?),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let value: Value = serde_json::from_str(&text).map_err(CliError::InvalidInput)?;

    let mut config = LayoutConfig::default();
    if let Some(x) = args.x_spacing {
        config.x_spacing = x;
    }
    if let Some(y) = args.y_spacing {
        config.y_spacing = y;
    }

    match args.command {
        Command::Graph => {
            let layout = layout_json_map(&value, &config);
            write_json(&layout, args.pretty, args.out.as_deref())
        }
        Command::Tree => {
            let mut root = build_virtual_tree(&value, &config);
            measure_tree(&mut root, &config);
            position_tree(&mut root, 0.0, 0.0, &config);
            write_json(&root, args.pretty, args.out.as_deref())
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
