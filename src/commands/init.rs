//! Board initialization commands

use anyhow::Result;
use colored::*;

use crate::core::config::{Config, CONFIG_FILE_NAME};
use crate::core::paths::get_board_root;
use crate::store::SqliteQuestionStore;

pub fn run(config: bool, database: Option<String>) -> Result<()> {
    if config || database.is_some() {
        return run_config_init(database);
    }

    println!("{}", "Tagboard Initialization".bold());
    println!("{}", "=".repeat(50));
    println!();
    println!("Usage:");
    println!(
        "  {} - Create config with the default store (questions.db)",
        "tagboard init --config".cyan()
    );
    println!(
        "  {} - Create config with a custom store path",
        "tagboard init --database <path>".cyan()
    );
    println!();
    println!("Examples:");
    println!("  tagboard init --config");
    println!("  tagboard init --database \"data/questions.db\"");
    println!();

    Ok(())
}

fn run_config_init(database: Option<String>) -> Result<()> {
    let board_root = get_board_root();
    let config_path = board_root.join(CONFIG_FILE_NAME);

    println!("{}", "Tagboard Configuration Generator".bold());
    println!("{}", "=".repeat(50));
    println!();

    let mut config = if config_path.exists() {
        println!("{} Loading existing config...", "→".blue());
        Config::load(&board_root)
    } else {
        Config::default()
    };

    if let Some(db) = &database {
        config.store.database = db.clone();
    }

    config.save(&board_root)?;

    if config_path.exists() {
        println!("{} Updated {}", "✓".green(), config_path.display());
    } else {
        println!("{} Created {}", "✓".green(), config_path.display());
    }

    let db_path = config.database_path(&board_root);
    if !db_path.exists() {
        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
                println!("{} Created directory {}", "✓".green(), parent.display());
            }
        }

        SqliteQuestionStore::open(&db_path)?;
        println!("{} Created {}", "✓".green(), db_path.display());
    } else {
        println!("{} Store already exists: {}", "→".blue(), db_path.display());
    }

    println!();
    println!("{}", "Configuration:".cyan());
    println!();
    println!("  suggest:");
    println!("    max_content_tags: {}", config.suggest.max_content_tags);
    println!("    max_trending_tags: {}", config.suggest.max_trending_tags);
    println!("    max_suggestions: {}", config.suggest.max_suggestions);
    println!(
        "    trending_window_days: {}",
        config.suggest.trending_window_days
    );
    println!();
    println!("  schema:");
    println!("    max_tags: {}", config.schema.max_tags);
    println!("    min_tags: {}", config.schema.min_tags);
    println!("    lowercase_tags: {}", config.schema.lowercase_tags);
    println!();
    println!("  store:");
    println!("    database: \"{}\"", config.store.database);
    println!();
    println!(
        "{}",
        "Edit .tagboard.json to customize limits and the store path.".dimmed()
    );
    println!();

    Ok(())
}
