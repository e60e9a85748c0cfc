#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** deskhop **
//! Coworking space directory with shareable visited progress

use deskhop_engine::storage::default_storage_path;
use deskhop_engine::style::DirectoryStyle;
use deskhop_engine::{VisitedStore, load_catalog, load_site_config, run_repl};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::info;

use std::env;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading deskhop catalog...");
    let catalog = load_catalog().context("while loading space catalog")?;
    info!("catalog loaded successfully.");

    let site = load_site_config();
    let base_url = site.share_base().context("while resolving the share base URL")?;

    // A share link (or bare token) on the command line is consumed exactly
    // once, during store initialization, then never re-applied.
    let args: Vec<String> = env::args().skip(1).collect();
    let shared = match args.as_slice() {
        [] => None,
        [input] => Some(input.clone()),
        [flag, input] if flag.as_str() == "--import" => Some(input.clone()),
        _ => bail!("usage: deskhop_engine [--import] [<share-link-or-token>]"),
    };

    let mut store = VisitedStore::initialize(default_storage_path(), base_url, shared.as_deref());
    info!("visited store initialized with {} spaces marked", store.count());

    println!("{:^72}", "DESKHOP: A COWORKING SPACE DIRECTORY".bright_yellow().underline());
    println!(
        "\n{}",
        format!(
            "{} spaces, {} visited. Type 'help' for commands.",
            catalog.len(),
            store.count()
        )
        .meta_style()
    );

    run_repl(&catalog, &mut store, &site)
}
