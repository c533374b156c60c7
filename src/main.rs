//! Command-line front end: load the connection file, then list the stops a
//! given number of hops away from an origin station.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::{debug, error, info};
use serde::Serialize;
use tube_stops::{AdjacencyMap, Error, Station};

#[derive(Parser)]
#[command(name = "tube_stops")]
#[command(about = "Lists the stations exactly N stops away from an origin station")]
struct Cli {
    /// Connection file: a header line, then records whose 2nd and 3rd fields are stations
    #[arg(long, env = "TUBE_STOPS_DATA", default_value = "London tube lines.csv")]
    data: PathBuf,

    /// Origin station
    #[arg(long, default_value = "East Ham")]
    origin: String,

    /// Number of stops from the origin
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    hops: i64,

    /// Read queries ("<hops> <origin>") from stdin until EOF or ":quit"
    #[arg(short, long)]
    interactive: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    origin: &'a str,
    hops: i64,
    stations: &'a BTreeSet<Station>,
    elapsed_ms: u128,
}

#[derive(Debug, PartialEq)]
enum Command {
    Query { hops: i64, origin: String },
    Reload,
    Quit,
    Blank,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let adjacency = load_graph(&cli.data)?;

    if cli.interactive {
        return interactive(&cli.data, adjacency, cli.json);
    }
    let output = run_query(&adjacency, &cli.origin, cli.hops, cli.json)?;
    print!("{output}");
    Ok(())
}

fn load_graph(data: &Path) -> Result<AdjacencyMap> {
    let connections = tube_stops::parse_connections(data).with_context(|| {
        format!(
            "Failed to load data. Please make sure the {} file exists.",
            data.display()
        )
    })?;
    let adjacency = tube_stops::build(connections);
    debug!("built graph with {} stations", adjacency.len());
    Ok(adjacency)
}

/// Runs one query and renders it. The reported time covers the search and
/// the rendering of its result.
fn run_query(adjacency: &AdjacencyMap, origin: &str, hops: i64, json: bool) -> Result<String> {
    let start = Instant::now();
    let stations = match tube_stops::stops_n_hops_away(adjacency, origin, hops) {
        Ok(stations) => stations,
        Err(Error::UnknownStation(name)) => {
            let hint = closest_station(adjacency, &name)
                .map(|s| format!(" (did you mean '{s}'?)"))
                .unwrap_or_default();
            bail!("Please enter a valid station: '{name}' not found{hint}");
        }
        Err(e) => return Err(e.into()),
    };

    let mut report = QueryReport {
        origin,
        hops,
        stations: &stations,
        elapsed_ms: 0,
    };
    if json {
        report.elapsed_ms = start.elapsed().as_millis();
        let mut out = serde_json::to_string(&report)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = format!("Stops {hops} hops away from {origin}:\n\n");
    for station in &stations {
        writeln!(out, "\t--   {station}")?;
    }
    report.elapsed_ms = start.elapsed().as_millis();
    writeln!(out, "\nTime: {} ms", report.elapsed_ms)?;
    Ok(out)
}

fn closest_station<'a>(adjacency: &'a AdjacencyMap, name: &str) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    adjacency
        .keys()
        .map(|s| (s, strsim::jaro_winkler(&s.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(s, _)| s.as_str())
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line {
        "" => return Ok(Command::Blank),
        ":reload" => return Ok(Command::Reload),
        ":quit" | ":q" => return Ok(Command::Quit),
        _ => {}
    }

    let (hops, origin) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected '<hops> <origin>', got '{line}'"))?;
    let hops = hops
        .parse::<i64>()
        .with_context(|| format!("'{hops}' is not a number of stops"))?;
    Ok(Command::Query {
        hops,
        origin: origin.trim().to_string(),
    })
}

/// Reads queries from stdin. `:reload` swaps in a freshly built graph; the
/// current one is never modified.
fn interactive(data: &Path, mut adjacency: AdjacencyMap, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        match parse_command(&line) {
            Ok(Command::Blank) => {}
            Ok(Command::Quit) => break,
            Ok(Command::Reload) => match load_graph(data) {
                Ok(fresh) => {
                    info!("reloaded {}", data.display());
                    adjacency = fresh;
                    writeln!(stdout, "Reloaded {} stations", adjacency.len())?;
                }
                Err(e) => eprintln!("{e:#}"),
            },
            Ok(Command::Query { hops, origin }) => {
                match run_query(&adjacency, &origin, hops, json) {
                    Ok(output) => write!(stdout, "{output}")?,
                    Err(e) => eprintln!("{e:#}"),
                }
            }
            Err(e) => eprintln!("{e:#}"),
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
