// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{BufRead, ErrorKind};
use std::sync::Arc;

use eyre::Result;
use rustyline::{config::Configurer, error::ReadlineError, CompletionType, Editor};

use unitconv_core::{one_line, Catalog};

use crate::ConvHelper;

pub const HELP_TEXT: &'static str = "Enter a conversion like `5 km to miles` or `32 f in c`.
Lengths, weights, and temperatures are supported.
To quit, type `exit` or press Ctrl+D.";

pub fn noninteractive<T: BufRead>(mut f: T, show_prompt: bool) -> Result<()> {
    use std::io::{stdout, Write};

    let catalog = Catalog::new();
    let mut line = String::new();
    loop {
        if show_prompt {
            print!("> ");
        }
        stdout().flush().unwrap();
        if f.read_line(&mut line).is_err() {
            return Ok(());
        }
        // the underlying file object has hit an EOF if we try to read a
        // line but do not find the newline at the end, so let's break
        // out of the loop
        if line.find('\n').is_none() {
            return Ok(());
        }
        if line.trim().eq_ignore_ascii_case("exit") {
            return Ok(());
        }
        match one_line(&catalog, &line) {
            Ok(v) => println!("{}", v),
            Err(e) => println!("{}", e),
        };
        line.clear();
    }
}

pub fn interactive() -> Result<()> {
    let catalog = Arc::new(Catalog::new());
    let mut rl = Editor::<ConvHelper>::new();
    rl.set_helper(Some(ConvHelper::new(catalog.clone())));
    rl.set_completion_type(CompletionType::List);

    let mut hpath = dirs::data_local_dir().map(|mut path| {
        path.push("unitconv");
        path.push("history.txt");
        path
    });
    if let Some(ref mut path) = hpath {
        match rl.load_history(path) {
            // Ignore file not found errors.
            Err(ReadlineError::Io(ref err)) if err.kind() == ErrorKind::NotFound => (),
            Err(err) => eprintln!("Loading history failed: {}", err),
            Ok(()) => (),
        };
    }

    let save_history = |rl: &mut Editor<ConvHelper>| {
        if let Some(ref path) = hpath {
            // ignore error - if this fails, the next line will as well.
            let _ = std::fs::create_dir_all(path.parent().unwrap());
            rl.save_history(path).unwrap_or_else(|e| {
                eprintln!("Saving history failed: {}", e);
            });
        }
    };

    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(ref line) if line == "help" => {
                println!("{}", HELP_TEXT);
            }
            Ok(ref line) if line.trim().eq_ignore_ascii_case("exit") => {
                save_history(&mut rl);
                break;
            }
            Ok(line) => {
                rl.add_history_entry(&line);
                match one_line(&catalog, &line) {
                    Ok(v) => println!("{}", v),
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                save_history(&mut rl);
                break;
            }
            Err(err) => {
                println!("{:?}", eyre::eyre!(err).wrap_err("Readline"));
                break;
            }
        }
    }

    Ok(())
}
