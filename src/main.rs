// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hecele::{App, Cli, Error};

/// Exit status when a word or its syllables were refused.
const EXIT_REJECTED: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match App::new(cli) {
        Ok(mut app) => app.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        std::process::exit(report(e));
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("hecele=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hecele=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .without_time()
        .init();
}

/// Print the error and pick the exit status.
fn report(e: Error) -> i32 {
    match e {
        Error::Cancelled => {
            eprintln!("Aborted.");
            0
        }
        e @ (Error::Rejected { .. } | Error::SyllableMismatch { .. } | Error::NoSyllables) => {
            eprintln!("{:?}", miette::Report::new(e));
            EXIT_REJECTED
        }
        e => {
            eprintln!("{:?}", miette::Report::new(e));
            1
        }
    }
}
