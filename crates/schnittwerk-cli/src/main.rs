// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schnittwerk — Image crop engine, command-line front end.
//
// Entry point. Initialises logging, builds the editor, runs one crop, and
// prints the result as JSON on stdout.

mod cli;

use clap::Parser;

use schnittwerk_core::config::EditorConfig;
use schnittwerk_core::human_errors::humanize_error;
use schnittwerk_editor::ImageEditor;
use schnittwerk_staging::StagingArea;

fn main() {
    let args = cli::Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EditorConfig::default();
    let editor = match &args.out_dir {
        Some(dir) => {
            let staging = StagingArea::new(dir, config.staging_prefix.clone());
            ImageEditor::with_staging(config, staging)
        }
        None => ImageEditor::with_config(config),
    };

    match editor.crop_image(&args.source, &args.crop_data()) {
        Ok(result) => {
            let json = serde_json::to_string_pretty(&result)
                .expect("crop result is always serializable");
            println!("{json}");
        }
        Err(err) => {
            tracing::error!(error = %err, "crop failed");
            let human = humanize_error(&err);
            eprintln!("{} {}", human.message, human.suggestion);
            std::process::exit(1);
        }
    }
}
