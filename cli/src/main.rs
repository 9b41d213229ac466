// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, Command};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{stdin, BufReader};
use std::process::ExitCode;

use unitconv::repl;
use unitconv_core::{one_line, Catalog};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let matches = Command::new("unitconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive unit converter for lengths, weights, and temperatures")
        .arg(
            Arg::new("EXPR")
                .help("Evaluate a list of conversions. If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads conversions from a file, one per line. Pass `-` for stdin"),
        )
        .get_matches();

    if let Some(filename) = matches.get_one::<String>("file") {
        match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock(), false).map(|_| ExitCode::SUCCESS)
            }
            _ => {
                let file = File::open(&filename)
                    .wrap_err(format!("Failed to open input file `{filename}`"))?;
                repl::noninteractive(BufReader::new(file), false).map(|_| ExitCode::SUCCESS)
            }
        }
    } else if let Some(exprs) = matches.get_many::<String>("EXPR") {
        let catalog = Catalog::new();
        let mut exit_code = ExitCode::SUCCESS;
        for expr in exprs {
            println!("> {}", expr);
            match one_line(&catalog, expr) {
                Ok(v) => println!("{}", v),
                Err(e) => {
                    println!("{}", e);
                    exit_code = ExitCode::FAILURE;
                }
            }
        }
        Ok(exit_code)
    } else {
        repl::interactive().map(|_| ExitCode::SUCCESS)
    }
}
