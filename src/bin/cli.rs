use std::process;

use clap::Parser;

use bible_punctuation::models::PunctuationSystemTable;
use bible_punctuation::reference::Reference;
use bible_punctuation::{all_systems, system, PunctuationError};

/// CLI for resolving Bible book references against punctuation systems.
#[derive(Parser)]
#[command(name = "bible-punctuation", version, about)]
struct Args {
    /// The Bible reference to look up, e.g. "GEN 1:1"
    reference: Option<String>,

    /// The punctuation system to resolve against
    #[arg(long, default_value = "English")]
    system: String,

    /// Print the chosen system table as JSON and exit
    #[arg(long)]
    json: bool,

    /// List the known punctuation systems and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for system in all_systems() {
            println!("{} ({} books)", system.name, system.book_count());
        }
        return;
    }

    let system = match system(&args.system) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(system) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let raw = match args.reference {
        Some(raw) => raw,
        None => {
            eprintln!("A reference is required unless --list or --json is given.");
            process::exit(2);
        }
    };

    match resolve(&raw, system) {
        Ok((reference, index)) => {
            println!(
                "{}  (book {} of {})",
                reference.format_with(system),
                index,
                system.name
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Parses the raw reference and resolves its book in the system's
/// tables, normalising the book part to the table's abbreviation.
fn resolve(
    raw: &str,
    system: &PunctuationSystemTable,
) -> Result<(Reference, i32), PunctuationError> {
    let mut reference: Reference = raw.parse()?;

    let index =
        system
            .index_of(&reference.book)
            .ok_or_else(|| PunctuationError::BookNotFound {
                book: reference.book.clone(),
            })?;
    if let Some(abbreviation) = system.abbreviation_of(index) {
        reference.book = abbreviation.to_string();
    }

    Ok((reference, index))
}
