use clap::{Parser, Subcommand};

use tagboard::commands;

#[derive(Parser)]
#[command(name = "tagboard")]
#[command(about = "Tag suggestion engine for community Q&A boards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate board config and question store
    Init {
        #[arg(long, help = "Generate .tagboard.json config file")]
        config: bool,
        #[arg(long, help = "Path to question store (default: questions.db)")]
        database: Option<String>,
    },
    /// Import a JSON question corpus into the store
    Import {
        /// JSON file with an array of questions
        file: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Suggest tags for a question draft
    Suggest {
        /// Question title
        title: String,
        #[arg(short, long, default_value = "", help = "Question body")]
        body: String,
        #[arg(long, help = "Skip the trending query, content extraction only")]
        content_only: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show trending tags over the recent corpus
    Trending {
        #[arg(short, long, help = "Limit results")]
        limit: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List every tag in the corpus
    Tags {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config, database } => commands::init::run(config, database),
        Commands::Import { file, json } => commands::import::run(&file, json),
        Commands::Suggest {
            title,
            body,
            content_only,
            json,
        } => commands::suggest::run(&title, &body, content_only, json),
        Commands::Trending { limit, json } => commands::trending::run(limit, json),
        Commands::Tags { json } => commands::tags::run(json),
    }
}
