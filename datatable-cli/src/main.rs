mod cli;
mod command;
mod dataset;
mod error;
mod logging;
mod paths;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use datatable_lib::TableState;
use datatable_lib::TableView;
use datatable_lib::events::TableEvent;
use log::{debug, info, warn};

use crate::cli::Args;
use crate::command::{Command, HELP};
use crate::error::CliError;
use crate::paths::AppDirs;
use crate::render::Renderer;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let dirs = AppDirs::locate();
    logging::init(args.log_level, dirs.as_ref())?;

    let records = dataset::load_records(&args.dataset, args.records_key.as_deref())?;
    let mut options = dataset::load_options(args.options.as_deref(), dirs.as_ref().map(AppDirs::options_file))?;
    if !args.columns.is_empty() {
        options.display_keys = args.columns.clone();
    }
    dataset::infer_display_keys(&mut options, &records);

    let mut table = TableState::from_options(records, &options)?;
    let renderer = render::renderer_for(args.format, options);
    info!("Table ready: {:?}", table);

    let observer = Rc::clone(&renderer);
    table.subscribe(move |view: &TableView| {
        if let Err(e) = print_view(&mut io::stdout().lock(), observer.as_ref(), view) {
            warn!("Failed to draw table: {}", e);
        }
    });
    print_view(&mut io::stdout().lock(), renderer.as_ref(), &table.view())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        let event = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Show => {
                print_view(&mut io::stdout().lock(), renderer.as_ref(), &table.view())?;
                continue;
            }
            Command::Reload(ref path) => match dataset::load_records(path, args.records_key.as_deref()) {
                Ok(records) => TableEvent::Reload(records),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
            other => match other.into_event(&table.pagination_summary()) {
                Some(event) => event,
                None => continue,
            },
        };

        // Observers draw the new view
        if let Err(e) = table.dispatch(event) {
            warn!("Rejected command '{}': {}", line.trim(), e);
            eprintln!("{}", e);
        }
    }

    info!("Session ended");
    Ok(())
}

fn print_view(out: &mut impl Write, renderer: &dyn Renderer, view: &TableView) -> io::Result<()> {
    writeln!(out, "{}\n", renderer.render(view))?;
    out.flush()?;
    Ok(())
}
