use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use quadnav::cli::{bindings_json, parse_keys, CliArgs, CliCommand};
use quadnav::fs_watcher::BindingsWatcher;
use quadnav::keymap::{BindingSource, FileSource, KeyBindingTable, StaticSource};
use quadnav::model::{Point, Rect};
use quadnav::platform::HeadlessPlatform;
use quadnav::{Coordinator, Runtime, Settings};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    quadnav::tracing::init(args.verbose);

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    match &args.command {
        CliCommand::Check => Ok(if check(&args)? == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        CliCommand::Bindings {
            json,
            start_only,
            defaults,
        } => list_bindings(&args, *json, *start_only, *defaults),
        CliCommand::Simulate {
            monitors,
            pointer,
            keys,
        } => simulate(&args, settings, monitors, *pointer, keys),
    }
}

fn binding_source(args: &CliArgs) -> Box<dyn BindingSource> {
    match args.bindings_path() {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StaticSource::empty()),
    }
}

/// Report skipped lines in the bindings file, returning how many there were
fn check(args: &CliArgs) -> Result<usize> {
    let source = binding_source(args);
    let text = source
        .read_overrides()
        .with_context(|| format!("Failed to read {}", source.describe()))?;

    let Some(text) = text else {
        println!("{}: no bindings file, using defaults", source.describe());
        return Ok(0);
    };

    let (table, diagnostics) = KeyBindingTable::build(Some(&text));
    for diagnostic in &diagnostics {
        println!("{}: {}", source.describe(), diagnostic);
    }
    println!(
        "{} bindings, {} skipped lines",
        table.len(),
        diagnostics.len()
    );

    Ok(diagnostics.len())
}

fn list_bindings(
    args: &CliArgs,
    json: bool,
    start_only: bool,
    defaults: bool,
) -> Result<ExitCode> {
    let table = if defaults {
        KeyBindingTable::with_defaults()
    } else {
        KeyBindingTable::load(binding_source(args).as_ref()).0
    };

    let bindings = table
        .bindings()
        .iter()
        .filter(|b| !start_only || b.is_start());

    if json {
        println!("{}", bindings_json(bindings)?);
    } else {
        for binding in bindings {
            println!("{}", binding.to_config_line());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn simulate(
    args: &CliArgs,
    settings: Settings,
    monitors: &[Rect],
    pointer: Option<Point>,
    keys: &[String],
) -> Result<ExitCode> {
    let keystrokes = parse_keys(keys).map_err(anyhow::Error::msg)?;

    let mut platform = HeadlessPlatform::from_frames(monitors);
    if let Some(pointer) = pointer {
        platform = platform.with_pointer(pointer);
    }
    let origin = platform.created();

    let watch = settings.watch_bindings;
    let mut runtime = Runtime::new(Coordinator::new(platform, binding_source(args), settings));

    let _watcher = match args.bindings_path() {
        Some(path) if watch && path.exists() => BindingsWatcher::new(path, runtime.sender())
            .map_err(|e| tracing::warn!("Not watching bindings: {}", e))
            .ok(),
        _ => None,
    };

    for keystroke in keystrokes {
        if runtime.has_quit() {
            tracing::info!("Quit before {}, ignoring remaining keys", keystroke);
            break;
        }
        let answer = runtime.coordinator_mut().intercept(keystroke);
        println!(
            "key {:<20} {}",
            keystroke.to_string(),
            if answer.consumed { "consumed" } else { "passed through" }
        );
        runtime.process_cmd(answer.cmd);
        runtime.run_until_idle();
    }

    for recorded in runtime.coordinator().platform().events() {
        let offset = recorded.at.saturating_duration_since(origin);
        println!("{:>8.1}ms  {}", offset.as_secs_f64() * 1000.0, recorded.event);
    }

    match runtime.coordinator().session() {
        Some(session) => println!(
            "session on {} selecting {}",
            session.monitor.id,
            session.selection.current()
        ),
        None => println!("no session"),
    }

    Ok(ExitCode::SUCCESS)
}
