//! Command-line client for the word API.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use colored::{Color, ColoredString, Colorize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordbook::constants::FALLBACK_WORD_TYPES;
use wordbook::{
    validate_word, ApiConfig, FilterCriteria, TypeFilter, WordApi, WordDraft, WordId, WordStore,
};

#[derive(Parser)]
#[command(name = "words", about = "Vocabulary collection CLI", version)]
struct Cli {
    /// API base URL (overrides WORDBOOK_API_URL)
    #[arg(short, long)]
    server: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Request timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List words, filtered client-side
    List {
        /// Case-insensitive substring to match against the word text
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Keep only one word type ("All" disables the restriction)
        #[arg(short = 'T', long = "type", value_name = "TYPE")]
        word_type: Option<String>,
    },
    /// Print the server's word-type vocabulary
    Types,
    /// Add a word
    Add {
        word: String,
        #[arg(value_name = "TYPE")]
        word_type: String,
    },
    /// Update a word by id, replacing the whole record
    Update {
        id: WordId,
        word: String,
        #[arg(value_name = "TYPE")]
        word_type: String,
    },
    /// Delete a word by id
    Delete {
        id: WordId,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(server) = cli.server.as_deref() {
        let trimmed = server.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            config.base_url = trimmed.to_string();
        }
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    let api = WordApi::new(&config)?;
    let mut store = WordStore::new(api);

    match cli.command {
        Commands::List { search, word_type } => {
            store.hydrate().await?;
            let criteria = FilterCriteria {
                search_term: search.unwrap_or_default(),
                selected_type: word_type
                    .as_deref()
                    .map(TypeFilter::from_selection)
                    .unwrap_or_default(),
            };
            let visible = store.visible(&criteria);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for word in &visible {
                    println!("{:<6} {:<30} {}", word.id, word.word, type_tag(word.word_type.as_str()));
                }
                println!("Total: {}  Filtered: {}", store.words().len(), visible.len());
            }
        }
        Commands::Types => {
            let types = store.word_types().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(types)?);
            } else {
                for word_type in types {
                    println!("{}", type_tag(word_type.as_str()));
                }
            }
        }
        Commands::Add { word, word_type } => {
            let draft = WordDraft::new(word, word_type.as_str());
            ensure_valid(&draft)?;
            let created = store.create(&draft).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("Created: {} ({})", created.word, created.id);
            }
        }
        Commands::Update { id, word, word_type } => {
            let draft = WordDraft::new(word, word_type.as_str());
            ensure_valid(&draft)?;
            let updated = store.update(id, &draft).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!("Updated: {} ({})", updated.word, updated.id);
            }
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete word {}? [y/N] ", id))? {
                println!("Aborted");
                return Ok(());
            }
            store.delete(id).await?;
            println!("Deleted word: {}", id);
        }
    }

    Ok(())
}

/// Reject invalid drafts before any network call is made.
fn ensure_valid(draft: &WordDraft) -> anyhow::Result<()> {
    let errors = validate_word(draft);
    if errors.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = errors
        .messages()
        .into_iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect();
    anyhow::bail!("invalid word draft\n{}", lines.join("\n"))
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

// Display palette for the static type list; server types outside it print
// plain.
const TYPE_PALETTE: &[Color] = &[
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::BrightMagenta,
    Color::Cyan,
    Color::Red,
    Color::BrightYellow,
    Color::BrightCyan,
];

fn type_tag(name: &str) -> ColoredString {
    FALLBACK_WORD_TYPES
        .iter()
        .position(|known| known.eq_ignore_ascii_case(name))
        .map(|index| name.color(TYPE_PALETTE[index % TYPE_PALETTE.len()]))
        .unwrap_or_else(|| name.normal())
}
