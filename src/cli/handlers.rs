use std::io::{self, Write};

use tracing::warn;

use crate::app::{Confirm, Deletion, TodoApp};
use crate::config::Config;
use crate::entity::Category;
use crate::error::{Result, TodoError};
use crate::storage::FileStorage;

/// Opens the store at the configured location and loads it.
fn open_app(config: &Config) -> TodoApp<FileStorage> {
    let storage = FileStorage::new(&config.data_dir);
    let mut app = TodoApp::with_key(storage, config.storage_key.clone());
    app.load();
    app
}

/// `[y/N]` prompt on stderr, answered on stdin.
struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        eprint!("{}: {} [y/N] ", title, message);
        let _ = io::stderr().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => input.trim().eq_ignore_ascii_case("y"),
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

pub fn handle_list(config: &Config, category: String, json: bool) -> Result<()> {
    let category: Category = category.parse()?;
    let mut app = open_app(config);
    app.set_category(category);

    let rows = app.visible_items();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No {} to-dos. {}", category, app.placeholder());
    } else {
        println!("{}:\n", category);
        for row in rows {
            println!("  ({}) {}", row.id, row.text);
        }
    }

    Ok(())
}

pub fn handle_add(config: &Config, text: String, category: String, json: bool) -> Result<()> {
    let category: Category = category.parse()?;
    let mut app = open_app(config);
    app.set_category(category);
    app.set_draft(text);

    match app.submit_draft() {
        Some(id) => {
            let row = app
                .visible_items()
                .into_iter()
                .find(|row| row.id == id)
                .ok_or(TodoError::ItemNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("Added {} to-do ({}) - {}", row.category, row.id, row.text);
            }
        }
        None => println!("Nothing to add."),
    }

    Ok(())
}

pub fn handle_delete(config: &Config, id: String, force: bool) -> Result<()> {
    let mut app = open_app(config);

    if !app.items().contains(&id) {
        return Err(TodoError::ItemNotFound(id));
    }

    let outcome = if force {
        app.delete_item(&id, &mut |_: &str, _: &str| true)
    } else if atty::is(atty::Stream::Stdin) {
        app.delete_item(&id, &mut TerminalPrompt)
    } else {
        return Err(TodoError::ConfirmationRequired);
    };

    match outcome {
        Deletion::Removed(item) => {
            println!("Deleted {} to-do ({}) - {}", item.category, id, item.text);
            Ok(())
        }
        Deletion::Cancelled => {
            println!("Cancelled.");
            Ok(())
        }
        Deletion::NotFound => Err(TodoError::ItemNotFound(id)),
    }
}
