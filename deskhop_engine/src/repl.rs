//! REPL and command handling for the directory prompt.
//!
//! The directory runs in a read-eval-print loop. Handlers here render the
//! catalog and drive the [`VisitedStore`]; user-level problems are printed
//! and the loop keeps going, so only terminal failures end the session.

use std::collections::HashSet;

use anyhow::Result;
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use deskhop_data::{FoodAvailability, HasAc, NoiseLevel, OutletAvailability, SeatingType, WifiSpeed};

use crate::catalog::{Catalog, FilterState, SortDirection, SortField, SortState};
use crate::command::{Command, parse_command};
use crate::issue_url;
use crate::loader::SiteConfig;
use crate::progress::VisitedStore;
use crate::slug::slugify;
use crate::storage::default_history_path;
use crate::style::DirectoryStyle;

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read-eval-print loop until the user quits.
///
/// # Errors
/// - Propagates terminal setup or read failures; everything else is reported
///   at the prompt and the loop continues.
pub fn run_repl(catalog: &Catalog, store: &mut VisitedStore, site: &SiteConfig) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let history_path = default_history_path();
    if editor.load_history(&history_path).is_err() {
        info!("no prompt history at {}", history_path.display());
    }

    let mut filter = FilterState::default();
    let mut sort = SortState::default();

    loop {
        let prompt = format!("\n[{}/{} visited]>> ", store.count(), catalog.len())
            .prompt_style()
            .to_string();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => "quit".to_string(),
            Err(ReadlineError::Interrupted) => continue,
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);
        info!("input: '{input}'");

        let control = match parse_command(input) {
            Command::List => {
                list_handler(catalog, store, &filter, sort);
                ReplControl::Continue
            },
            Command::Show(pattern) => {
                show_handler(catalog, store, &pattern);
                ReplControl::Continue
            },
            Command::Filter { field, value } => {
                filter_handler(&mut filter, &field, &value);
                ReplControl::Continue
            },
            Command::FilterClear => {
                filter.clear();
                println!("Filters cleared.");
                ReplControl::Continue
            },
            Command::Sort { field, direction } => {
                sort_handler(&mut sort, &field, direction.as_deref());
                ReplControl::Continue
            },
            Command::Visit(pattern) => {
                visit_handler(catalog, store, &pattern, true);
                ReplControl::Continue
            },
            Command::Unvisit(pattern) => {
                visit_handler(catalog, store, &pattern, false);
                ReplControl::Continue
            },
            Command::Toggle(pattern) => {
                toggle_handler(catalog, store, &pattern);
                ReplControl::Continue
            },
            Command::Progress => {
                progress_handler(catalog, store);
                ReplControl::Continue
            },
            Command::Share => {
                share_handler(store);
                ReplControl::Continue
            },
            Command::Import(pasted) => {
                import_handler(store, &pasted);
                ReplControl::Continue
            },
            Command::Update(pattern) => {
                update_handler(catalog, site, &pattern);
                ReplControl::Continue
            },
            Command::Suggest => {
                println!("Suggest a new space:");
                println!("{}", issue_url::new_space_url(&site.github_repo).link_style());
                ReplControl::Continue
            },
            Command::Help => {
                help_handler();
                ReplControl::Continue
            },
            Command::Quit => quit_handler(catalog, store),
            Command::Unknown => {
                println!("{}", "Unrecognized command. Try 'help'.".error_style());
                ReplControl::Continue
            },
        };
        if matches!(control, ReplControl::Quit) {
            break;
        }
    }

    if let Err(err) = editor.save_history(&history_path) {
        warn!("failed to save prompt history: {err}");
    }
    Ok(())
}

/// List the catalog under the active filter and sort.
fn list_handler(catalog: &Catalog, store: &VisitedStore, filter: &FilterState, sort: SortState) {
    let view = catalog.view(filter, sort);
    if view.is_empty() {
        println!("{}", "No spaces match the current filters.".error_style());
        return;
    }
    let scope = if filter.is_empty() {
        format!("all {} spaces", catalog.len())
    } else {
        format!("{} of {} spaces", view.len(), catalog.len())
    };
    println!("{}", scope.subheading_style());
    for space in view {
        let mark = if store.is_visited(&space.name) {
            "[x]".visited_style()
        } else {
            "[ ]".unvisited_style()
        };
        let meta = format!(
            "{} noise, {} wifi, {}",
            space.noise_level.label().to_lowercase(),
            space.wifi_speed.label().to_lowercase(),
            space.seating_type.label().to_lowercase(),
        );
        println!("{mark} {}  {}", space.name.space_style(), meta.meta_style());
    }
}

/// Show the full card for one space.
fn show_handler(catalog: &Catalog, store: &VisitedStore, pattern: &str) {
    let space = match catalog.resolve(pattern) {
        Ok(space) => space,
        Err(err) => {
            println!("{}", err.to_string().error_style());
            return;
        },
    };
    let mark = if store.is_visited(&space.name) {
        "visited".visited_style()
    } else {
        "not visited yet".unvisited_style()
    };
    println!("{} ({mark})", space.name.title_style());
    println!("{}", space.address.meta_style());
    println!("{}", space.google_maps_url.link_style());
    if !space.opening_hours.is_empty() {
        println!("Open: {}", space.opening_hours);
    }
    if !space.description.is_empty() {
        let width = textwrap::termwidth().min(80);
        println!("\n{}", textwrap::fill(&space.description, width).description_style());
    }
    println!();
    detail_line("Noise", space.noise_level.label(), &space.atmosphere_notes);
    detail_line("WiFi", space.wifi_speed.label(), &space.wifi_notes);
    detail_line("Climate", space.has_ac.label(), &space.climate_notes);
    detail_line("Food", space.food_availability.label(), &space.food_notes);
    detail_line("Drinks", "", &space.drink_notes);
    detail_line("Seating", space.seating_type.label(), &space.seating_notes);
    detail_line("Outlets", space.has_outlets.label(), &space.outlet_notes);
}

/// One labeled detail row; rows with nothing to say are skipped.
fn detail_line(label: &str, value: &str, notes: &str) {
    if value.is_empty() && notes.is_empty() {
        return;
    }
    let mut line = format!("{}: {value}", label.subheading_style());
    if !notes.is_empty() {
        if !value.is_empty() {
            line.push_str(" -- ");
        }
        line.push_str(&notes.meta_style().to_string());
    }
    println!("{line}");
}

/// Update one criterion of the active filter from raw user operands.
fn filter_handler(filter: &mut FilterState, field: &str, value: &str) {
    fn apply<T>(slot: &mut Option<T>, all: bool, parsed: Option<T>) -> bool {
        if all {
            *slot = None;
            return true;
        }
        match parsed {
            Some(value) => {
                *slot = Some(value);
                true
            },
            None => false,
        }
    }

    let all = value == "all";
    let ok = match field {
        "noise" => apply(&mut filter.noise_level, all, NoiseLevel::from_key(value)),
        "wifi" => apply(&mut filter.wifi_speed, all, WifiSpeed::from_key(value)),
        "ac" | "climate" => apply(&mut filter.has_ac, all, HasAc::from_key(value)),
        "food" => apply(&mut filter.food_availability, all, FoodAvailability::from_key(value)),
        "seating" => apply(&mut filter.seating_type, all, SeatingType::from_key(value)),
        "outlets" => apply(&mut filter.has_outlets, all, OutletAvailability::from_key(value)),
        _ => {
            println!(
                "{}",
                format!("Unknown filter field '{field}'. Fields: noise, wifi, ac, food, seating, outlets.")
                    .error_style()
            );
            return;
        },
    };
    if ok {
        println!("Filter updated. 'list' to see matches, 'filter clear' to reset.");
    } else {
        println!(
            "{}",
            format!("'{value}' is not a valid {field} value (or 'all' to clear).").error_style()
        );
    }
}

/// Change the active sort from raw user operands.
fn sort_handler(sort: &mut SortState, field: &str, direction: Option<&str>) {
    let Some(field) = SortField::from_key(field) else {
        println!(
            "{}",
            format!("Unknown sort field '{field}'. Fields: name, wifi, noise.").error_style()
        );
        return;
    };
    let direction = match direction {
        None => SortDirection::Asc,
        Some(key) => match SortDirection::from_key(key) {
            Some(direction) => direction,
            None => {
                println!(
                    "{}",
                    format!("Sort direction must be 'asc' or 'desc', not '{key}'.").error_style()
                );
                return;
            },
        },
    };
    *sort = SortState { field, direction };
    println!("Sort updated.");
}

/// Mark or unmark a space as visited.
fn visit_handler(catalog: &Catalog, store: &mut VisitedStore, pattern: &str, visited: bool) {
    let space = match catalog.resolve(pattern) {
        Ok(space) => space,
        Err(err) => {
            println!("{}", err.to_string().error_style());
            return;
        },
    };
    if visited {
        store.mark_visited(&space.name);
        println!("Checked off {} ({} visited).", space.name.space_style(), store.count());
    } else {
        store.mark_unvisited(&space.name);
        println!("Unchecked {} ({} visited).", space.name.space_style(), store.count());
    }
}

/// Flip a space's visited mark.
fn toggle_handler(catalog: &Catalog, store: &mut VisitedStore, pattern: &str) {
    let space = match catalog.resolve(pattern) {
        Ok(space) => space,
        Err(err) => {
            println!("{}", err.to_string().error_style());
            return;
        },
    };
    if store.toggle_visited(&space.name) {
        println!("Checked off {}.", space.name.space_style());
    } else {
        println!("Unchecked {}.", space.name.space_style());
    }
}

/// List everything visited, including slugs imported from another catalog.
fn progress_handler(catalog: &Catalog, store: &VisitedStore) {
    println!(
        "{}",
        format!("Visited {} of {} spaces.", store.count(), catalog.len()).subheading_style()
    );
    for space in &catalog.spaces {
        if store.is_visited(&space.name) {
            println!(" [x] {}", space.name.space_style());
        }
    }
    let known: HashSet<String> = catalog.spaces.iter().map(|space| slugify(&space.name)).collect();
    for slug in store.visited_slugs() {
        if !known.contains(&slug) {
            println!(" [x] {} {}", slug.slug_style(), "(not in this catalog)".meta_style());
        }
    }
}

/// Print the share link for the current progress.
fn share_handler(store: &VisitedStore) {
    if store.count() == 0 {
        println!("Nothing visited yet; the link below carries no progress.");
    }
    println!("{}", store.shareable_url().link_style());
}

/// Merge progress pasted from another machine's share link.
fn import_handler(store: &mut VisitedStore, input: &str) {
    match store.import_shared(input) {
        0 => println!("Nothing new to import."),
        added => println!("Imported {added} visited spaces ({} total).", store.count()),
    }
}

/// Print a pre-filled correction issue link for one space.
fn update_handler(catalog: &Catalog, site: &SiteConfig, pattern: &str) {
    match catalog.resolve(pattern) {
        Ok(space) => {
            println!("Suggest corrections for {}:", space.name.space_style());
            println!("{}", issue_url::update_space_url(&site.github_repo, space).link_style());
        },
        Err(err) => println!("{}", err.to_string().error_style()),
    }
}

/// Show available commands.
fn help_handler() {
    println!("{}", "Commands".subheading_style());
    println!("  list                      show the catalog under the active filter/sort");
    println!("  show <space>              full details for one space");
    println!("  filter <field> <value>    narrow the listing (value 'all' clears the field)");
    println!("  filter clear              drop every filter");
    println!("  sort <field> [asc|desc]   order by name, wifi, or noise");
    println!("  visit / unvisit <space>   check a space off (or back on) your list");
    println!("  toggle <space>            flip a space's visited mark");
    println!("  progress                  everything you have visited");
    println!("  share                     link that carries your progress to another machine");
    println!("  import <link-or-token>    merge progress from someone else's share link");
    println!("  update <space>            pre-filled issue link to correct a space's data");
    println!("  suggest                   issue link to propose a new space");
    println!("  quit                      save history and exit");
}

/// Final summary on the way out.
fn quit_handler(catalog: &Catalog, store: &VisitedStore) -> ReplControl {
    let in_catalog = catalog
        .spaces
        .iter()
        .filter(|space| store.is_visited(&space.name))
        .count();
    info!("session ended with {} spaces visited", store.count());
    println!("Visited {in_catalog} of {} spaces. Happy hopping.", catalog.len());
    ReplControl::Quit
}
