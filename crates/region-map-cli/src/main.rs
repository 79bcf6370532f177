//! Region map lookup tool
//!
//! Usage:
//! - `regionmap <id64>...` - decode boxels and classify their origins
//! - `regionmap <x,y,z>...` - find the region of galactic coordinates
//! - `regionmap -` - locate system records (JSON array or one object per line) read from stdin
//! - `regionmap regions` - list the region name table
//!
//! Results are written to stdout as one JSON object per line.
//!
//! Environment:
//! - `REGION_MAP` - path to an alternate region map JSON file
//! - `RUST_LOG` - log filter

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use eyre::{WrapErr, bail};
use rayon::prelude::*;
use region_map::{Coords, Region, RegionGrid, SystemRecord};
use serde::Serialize;
use tracing::{debug, info};

/// A single lookup requested on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
enum Query {
    Id64(u64),
    Point(Coords),
}

/// What to do with the arguments
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Lookup(Vec<Query>),
    Stdin,
    Regions,
}

/// Output line for a coordinate lookup
#[derive(Serialize)]
struct PointLookup<'a> {
    coords: Coords,
    region: Option<Region<'a>>,
}

fn parse_query(arg: &str) -> eyre::Result<Query> {
    if arg.contains(',') {
        let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
        let [x, y, z] = parts[..] else {
            bail!("expected x,y,z but got {arg:?}");
        };
        let parse = |v: &str| {
            v.parse::<f64>()
                .wrap_err_with(|| format!("invalid coordinate {v:?} in {arg:?}"))
        };
        return Ok(Query::Point(Coords {
            x: parse(x)?,
            y: parse(y)?,
            z: parse(z)?,
        }));
    }

    let id = arg
        .parse::<u64>()
        .wrap_err_with(|| format!("invalid id64 {arg:?}"))?;
    Ok(Query::Id64(id))
}

fn parse_command(args: &[String]) -> eyre::Result<Command> {
    match args {
        [] => bail!("usage: regionmap <id64 | x,y,z>... | regionmap - | regionmap regions"),
        [only] if only == "-" => Ok(Command::Stdin),
        [only] if only == "regions" => Ok(Command::Regions),
        _ => args
            .iter()
            .map(|arg| parse_query(arg))
            .collect::<eyre::Result<Vec<_>>>()
            .map(Command::Lookup),
    }
}

/// Parse system records from either a JSON array or concatenated objects.
fn parse_records(input: &str) -> eyre::Result<Vec<SystemRecord>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).wrap_err("failed to parse system record array");
    }

    serde_json::Deserializer::from_str(input)
        .into_iter::<SystemRecord>()
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("failed to parse system records")
}

fn run_lookup(grid: &RegionGrid, queries: &[Query], out: &mut impl Write) -> eyre::Result<()> {
    for query in queries {
        match *query {
            Query::Id64(id) => {
                let classification = grid.classify(id);
                serde_json::to_writer(&mut *out, &classification)?;
            }
            Query::Point(coords) => {
                let lookup = PointLookup {
                    coords,
                    region: grid.find_region(coords.x, coords.y, coords.z),
                };
                serde_json::to_writer(&mut *out, &lookup)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn run_stdin(grid: &RegionGrid, input: &str, out: &mut impl Write) -> eyre::Result<()> {
    let records = parse_records(input)?;
    info!("Locating {} systems", records.len());

    let lines = records
        .par_iter()
        .map(|record| serde_json::to_string(&grid.locate(record)))
        .collect::<Result<Vec<_>, _>>()?;

    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_regions(grid: &RegionGrid, out: &mut impl Write) -> eyre::Result<()> {
    for region in grid.regions() {
        serde_json::to_writer(&mut *out, &region)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("regionmap=info".parse()?)
                .add_directive("region_map=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args)?;
    debug!(?command, "parsed arguments");

    // Configuration
    let loaded;
    let grid = match std::env::var("REGION_MAP") {
        Ok(path) => {
            let path = PathBuf::from(path);
            info!("Region map: {}", path.display());
            loaded = RegionGrid::from_path(&path)
                .wrap_err_with(|| format!("failed to load {}", path.display()))?;
            &loaded
        }
        Err(_) => RegionGrid::embedded(),
    };

    let mut out = BufWriter::new(io::stdout().lock());
    match command {
        Command::Lookup(queries) => run_lookup(grid, &queries, &mut out)?,
        Command::Stdin => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            run_stdin(grid, &input, &mut out)?;
        }
        Command::Regions => run_regions(grid, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
