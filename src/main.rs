use clap::Parser;
use tracing::info;

use meibo::cli::Args;
use meibo::config::Config;
use meibo::contacts::models::ContactsFile;
use meibo::contacts::{ContactStore, MemoryStore, build_index};
use meibo::error::AppError;
use meibo::logging::setup_logging;
use meibo::name_index::{IndexBucket, KanaTransliterate, PersonName, Transliterate, classify};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration operations run before logging setup so they do not
    // create log directories as a side effect.
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.new_contacts_file.is_some() || args.new_log_file_path.is_some() {
        return update_config(&args).await;
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    if let Some(spec) = &args.classify {
        run_classify(spec, &args);
        return Ok(());
    }

    run_index(&args).await
}

/// Applies --set-contacts-file / --set-log-file to the stored config.
async fn update_config(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(contacts_file) = &args.new_contacts_file {
        config.contacts_file = Some(contacts_file.clone());
    }
    if let Some(log_file_path) = &args.new_log_file_path {
        config.log_file_path = Some(log_file_path.clone());
    }

    config.validate()?;
    config.save().await?;
    println!("Configuration updated: {}", Config::get_config_path());

    Ok(())
}

/// Classifies a single name given as LAST[,FIRST[,NICKNAME]] and
/// prints its bucket.
fn run_classify(spec: &str, args: &Args) {
    let mut parts = spec.splitn(3, ',');
    let name = PersonName {
        last_name: parts.next().unwrap_or_default().trim().to_string(),
        first_name: parts.next().unwrap_or_default().trim().to_string(),
        nickname: parts.next().unwrap_or_default().trim().to_string(),
        last_name_furigana: args.furigana.clone().filter(|s| !s.is_empty()),
        first_name_furigana: None,
    };

    let bucket = classify(&name);
    println!("{}", bucket.label());
}

/// Reads the contacts file, seeds the in-memory store and prints the
/// phonetic index.
async fn run_index(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await.unwrap_or_default();
    let path = args
        .file
        .as_ref()
        .or(config.contacts_file.as_ref())
        .ok_or_else(|| {
            AppError::config_error(
                "No contacts file given; pass --file or set one with --set-contacts-file",
            )
        })?;

    let content = tokio::fs::read_to_string(path).await?;
    let contacts: ContactsFile = serde_json::from_str(&content)?;
    info!(
        "Loaded {} persons and {} groups from {path}",
        contacts.persons.len(),
        contacts.groups.len()
    );

    let store = MemoryStore::with_data(contacts.persons, contacts.groups);
    let persons = store.list_persons().await?;
    let sections = build_index(persons);

    if sections.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    let transliterate = KanaTransliterate;
    for section in &sections {
        println!("{} ({})", section.bucket.label(), section.persons.len());
        for person in &section.persons {
            let reading = person
                .last_name_furigana
                .as_deref()
                .filter(|s| !s.is_empty());
            match reading {
                Some(reading) if args.katakana => {
                    println!(
                        "  {}  [{}]",
                        person.display_name(),
                        transliterate.to_katakana(reading)
                    );
                }
                Some(reading) => {
                    println!("  {}  [{reading}]", person.display_name());
                }
                None if section.bucket == IndexBucket::Other => {
                    println!("  {}  (no reading)", person.display_name());
                }
                None => {
                    println!("  {}", person.display_name());
                }
            }
        }
    }

    Ok(())
}
