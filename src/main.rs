// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxflow CLI entrypoint.
//!
//! Reads a JSON board description from a file (or stdin with `-`) and prints the composed
//! board to stdout. Set `RUST_LOG=boxflow=debug` to trace composition on stderr.

use std::error::Error;
use std::io::Read as _;

use boxflow::format::parse_board_json;
use boxflow::model::BoardDescription;
use boxflow::render::canvas_to_string_trimmed;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <board.json> [--trim]\n  {program} - [--trim]\n  {program} --demo [--trim]\n\n`-` reads the board description from stdin.\n--demo prints a built-in showcase board and cannot be combined with a path.\n--trim strips trailing spaces and trailing blank lines."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    trim: bool,
    path: Option<String>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--trim" => {
                if options.trim {
                    return Err(());
                }
                options.trim = true;
            }
            "-" => {
                if options.path.is_some() {
                    return Err(());
                }
                options.path = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.path.is_some() {
                    return Err(());
                }
                options.path = Some(arg);
            }
        }
    }

    if options.demo == options.path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_description(path: &str) -> Result<BoardDescription, Box<dyn Error>> {
    let input = if path == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input
    } else {
        std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?
    };

    Ok(parse_board_json(&input)?)
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "boxflow".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let description = match options.path.as_deref() {
            Some(path) => load_description(path)?,
            None => BoardDescription::demo(),
        };
        tracing::info!(boxes = description.boxes.len(), "rendering board");

        let board = description.render()?;
        if options.trim {
            println!("{}", canvas_to_string_trimmed(&board));
        } else {
            println!("{board}");
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("boxflow: {err}");
        std::process::exit(1);
    }
}
