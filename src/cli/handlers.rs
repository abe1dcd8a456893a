use std::path::Path;

use crate::cli::commands::{Cli, Commands};
use crate::cli::output;
use crate::engine::{Engine, InputEvent};
use crate::io::catalog_io::{self, CatalogError};
use crate::io::store::FileStore;

/// Directory (next to the catalog file) holding the completion snapshot
const STORE_DIR: &str = ".syllabus";

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the catalog, run one command against the engine, print the result.
pub fn dispatch(cli: Cli) -> Result<(), HandlerError> {
    let syllabus = catalog_io::load_syllabus(&cli.catalog)?;
    let store_root = cli
        .catalog
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .join(STORE_DIR);
    let mut engine = Engine::new(syllabus.catalog, FileStore::new(store_root));

    match cli.command {
        Commands::List => {
            let vm = engine.view_model();
            output::print_list(engine.catalog(), engine.completion(), &vm.stats, cli.json);
        }
        Commands::Stats => {
            output::print_stats(&engine.view_model().stats, cli.json);
        }
        Commands::Toggle(args) => {
            let mut vm = engine.view_model();
            for id in args.ids {
                if !engine.catalog().contains_id(&id) {
                    eprintln!("warning: unknown chapter id: {}", id);
                    continue;
                }
                vm = engine.handle(InputEvent::Toggle(id));
            }
            if let Some(e) = engine.last_save_error() {
                eprintln!("warning: progress not saved: {}", e);
            }
            output::print_stats(&vm.stats, cli.json);
        }
        Commands::Search(args) => {
            let vm = engine.handle(InputEvent::QueryChanged(args.query));
            output::print_search(&vm, cli.json);
        }
        Commands::Reset => {
            let vm = engine.set_all(std::iter::empty());
            if let Some(e) = engine.last_save_error() {
                eprintln!("warning: progress not saved: {}", e);
            }
            if !cli.json {
                println!("progress cleared");
            } else {
                output::print_stats(&vm.stats, true);
            }
        }
    }
    Ok(())
}
