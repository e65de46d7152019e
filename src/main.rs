// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridsketch CLI entrypoint.
//!
//! Reads a sketch file (or stdin), detects widgets and prints them. With `--repair` near misses
//! are healed first; `--write` stores the repaired sketch back into the file.
//!
//! Log output goes to stderr and is controlled by `GRIDSKETCH_LOG` (e.g. `GRIDSKETCH_LOG=debug`).

use std::error::Error;
use std::fmt::Write as _;
use std::io::Read as _;

use gridsketch::export::{detection_summary_schema, DetectionSummary};
use gridsketch::{detect_widgets, detect_widgets_with_diagnostics, Grid, RepairSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GRIDSKETCH_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file>] [--repair] [--threshold <0..1>] [--min-width <n>] [--min-height <n>] [--json]\n  {program} <file> --repair --write [--threshold <0..1>]\n  {program} --schema\n\nWithout <file> the sketch is read from stdin.\n--repair heals near-miss widgets before detection (default threshold 0.7).\n--write stores the repaired sketch back into <file>.\n--json prints the detection summary as JSON; --schema prints its JSON schema.\n\nSet {LOG_ENV} (e.g. `debug`) to log detection passes to stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    file: Option<String>,
    repair: bool,
    threshold: Option<f64>,
    min_width: Option<usize>,
    min_height: Option<usize>,
    json: bool,
    write: bool,
    schema: bool,
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn set_value<T: std::str::FromStr>(
    slot: &mut Option<T>,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    let raw = args.next().ok_or(())?;
    *slot = Some(raw.trim().parse::<T>().map_err(|_| ())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--repair" => set_flag(&mut options.repair)?,
            "--json" => set_flag(&mut options.json)?,
            "--write" => set_flag(&mut options.write)?,
            "--schema" => set_flag(&mut options.schema)?,
            "--threshold" => set_value(&mut options.threshold, &mut args)?,
            "--min-width" => set_value(&mut options.min_width, &mut args)?,
            "--min-height" => set_value(&mut options.min_height, &mut args)?,
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
        }
    }

    if let Some(threshold) = options.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(());
        }
    }

    if options.write && (options.file.is_none() || !options.repair) {
        return Err(());
    }

    Ok(options)
}

fn format_summary(summary: &DetectionSummary) -> String {
    let mut out = String::new();
    for widget in &summary.widgets {
        let detail = widget
            .label
            .as_deref()
            .or(widget.content.as_deref())
            .or(widget.direction.as_deref())
            .unwrap_or("");
        let _ = writeln!(
            out,
            "{:<6} {},{} {}x{} {detail}",
            widget.kind, widget.col, widget.row, widget.width, widget.height
        );
    }
    for repair in &summary.repairs {
        let status = if repair.resolved { "" } else { " [unresolved]" };
        let _ = writeln!(
            out,
            "repair {},{} {:?} -> {:?} ({}: {}){status}",
            repair.col, repair.row, repair.actual, repair.expected, repair.plugin, repair.description
        );
    }
    out.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gridsketch".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&detection_summary_schema())?);
            return Ok(());
        }

        let text = match &options.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        let grid = Grid::from_text(
            &text,
            options.min_width.unwrap_or(0),
            options.min_height.unwrap_or(0),
        );

        let summary = if options.repair {
            let mut settings = RepairSettings::default();
            if let Some(threshold) = options.threshold {
                settings = settings.with_threshold(threshold);
            }
            let report = detect_widgets_with_diagnostics(&grid, &settings);
            if let (true, true, Some(path)) = (options.write, report.repaired(), &options.file) {
                std::fs::write(path, report.grid.to_text())?;
                info!(path = %path, repairs = report.repairs.len(), "wrote repaired sketch");
            }
            DetectionSummary::from(&report)
        } else {
            DetectionSummary::from_widgets(&detect_widgets(&grid))
        };

        if options.json {
            println!("{}", summary.to_json_pretty()?);
        } else {
            println!("{}", format_summary(&summary));
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("gridsketch: {err}");
        std::process::exit(1);
    }
}
