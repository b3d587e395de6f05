use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};

use crate::config_loader::{RenderFormat, SemverConfig};
use crate::errors::SemverResult;
use crate::ordering::{latest, ByVersion};
use crate::version::Version;

/// Top-level CLI interface for semverkit
#[derive(Parser, Debug)]
#[command(
    name = "semverkit",
    version,
    about = "Render, compare and sort semantic versions"
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to semverkit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a version in full, short or core form
    Render {
        #[arg(value_name = "VERSION")]
        value: Version,
        #[arg(short, long, value_enum)]
        format: Option<RenderFormat>,
    },

    /// Compare two versions by precedence (prints -1, 0 or 1)
    Compare { a: Version, b: Version },

    /// Sort versions by precedence
    Sort {
        #[arg(required = true)]
        versions: Vec<Version>,
        #[arg(short, long)]
        descending: bool,
    },

    /// Print the highest-precedence version
    Latest {
        #[arg(required = true)]
        versions: Vec<Version>,
    },

    /// Print the version of this tool
    Current,
}

/// Run one command, writing its output to `out`.
///
/// Command-line flags win over `config`.
pub fn dispatch<W: Write>(cli: Cli, config: &SemverConfig, out: &mut W) -> SemverResult<()> {
    let as_json = cli.json || config.json;
    debug!(command = ?cli.command, as_json, "dispatching");

    match cli.command {
        Commands::Render { value, format } => {
            let format = format.unwrap_or(config.format);
            let rendered = format.render(&value);
            if as_json {
                let payload = json!({ "version": value, "format": format, "rendered": rendered });
                writeln!(out, "{}", serde_json::to_string(&payload)?)?;
            } else {
                writeln!(out, "{rendered}")?;
            }
        }
        Commands::Compare { a, b } => {
            let result = a.compare_i32(&b);
            info!(a = %a, b = %b, result, "compared");
            if as_json {
                let value = json!({ "a": a, "b": b, "result": result });
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            } else {
                writeln!(out, "{result}")?;
            }
        }
        Commands::Sort {
            mut versions,
            descending,
        } => {
            let mut seq = ByVersion(&mut versions);
            if descending {
                seq.sort_descending();
            } else {
                seq.sort();
            }
            if as_json {
                writeln!(out, "{}", serde_json::to_string(&versions)?)?;
            } else {
                for version in &versions {
                    writeln!(out, "{}", config.format.render(version))?;
                }
            }
        }
        Commands::Latest { versions } => {
            if let Some(top) = latest(&versions) {
                if as_json {
                    writeln!(out, "{}", serde_json::to_string(top)?)?;
                } else {
                    writeln!(out, "{}", config.format.render(top))?;
                }
            }
        }
        Commands::Current => {
            let current = crate::current::current();
            if as_json {
                let value = json!({
                    "version": current,
                    "short": current.short(),
                    "build": current.build,
                });
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            } else {
                writeln!(out, "{}", config.format.render(&current))?;
            }
        }
    }

    Ok(())
}
