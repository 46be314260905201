//! Command-line argument parsing
//!
//! Supports:
//! - Checking a bindings file for skipped lines
//! - Listing the effective binding table
//! - Simulating key presses against a headless desktop

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::keymap::{parse_key_spec, KeyBinding, Keystroke};
use crate::model::{Point, Rect};

/// Keyboard-driven pointer navigation by recursive screen bisection
#[derive(Parser, Debug)]
#[command(name = "quadnav", version, about)]
pub struct CliArgs {
    /// Bindings file (defaults to ~/.config/quadnav/bindings)
    #[arg(long, value_name = "PATH", global = true)]
    pub bindings: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/quadnav/config.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level console logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Parse the bindings file and report every skipped line
    Check,

    /// Print the effective binding table
    Bindings {
        /// Emit JSON instead of binding-file syntax
        #[arg(long)]
        json: bool,

        /// Only bindings that start a session
        #[arg(long)]
        start_only: bool,

        /// Ignore the bindings file and show the built-in table
        #[arg(long)]
        defaults: bool,
    },

    /// Feed key presses through a headless session and print the effects
    Simulate {
        /// Monitor frames as WxH+X+Y, comma separated
        #[arg(
            long,
            value_delimiter = ',',
            default_values = ["1920x1080+0+0", "1920x1080+1920+0"]
        )]
        monitors: Vec<Rect>,

        /// Initial pointer position as X,Y
        #[arg(long, value_parser = parse_point)]
        pointer: Option<Point>,

        /// Key specs in binding-file syntax, e.g. ctrl+semicolon h j return
        #[arg(value_name = "KEYS", required = true)]
        keys: Vec<String>,
    },
}

impl CliArgs {
    /// Explicit `--bindings`, or the default location
    pub fn bindings_path(&self) -> Option<PathBuf> {
        self.bindings
            .clone()
            .or_else(crate::config_paths::bindings_file)
    }
}

/// Parse `X,Y` into a point
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid point '{}', expected X,Y", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("Invalid x coordinate '{}'", x))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("Invalid y coordinate '{}'", y))?;
    Ok(Point::new(x, y))
}

/// Parse every key spec, reporting the first one that is not a known key
pub fn parse_keys(specs: &[String]) -> Result<Vec<Keystroke>, String> {
    specs
        .iter()
        .map(|spec| parse_key_spec(spec).map_err(|key| format!("Unknown key '{}' in '{}'", key, spec)))
        .collect()
}

/// A binding as printed by `bindings --json`
#[derive(Debug, Serialize)]
pub struct BindingRow {
    pub key: String,
    pub actions: Vec<String>,
}

impl From<&KeyBinding> for BindingRow {
    fn from(binding: &KeyBinding) -> Self {
        Self {
            key: binding.keystroke.to_string(),
            actions: binding.actions.iter().map(|a| a.name()).collect(),
        }
    }
}

/// Render bindings as a pretty JSON array
pub fn bindings_json<'a>(
    bindings: impl IntoIterator<Item = &'a KeyBinding>,
) -> serde_json::Result<String> {
    let rows: Vec<BindingRow> = bindings.into_iter().map(BindingRow::from).collect();
    serde_json::to_string_pretty(&rows)
}
