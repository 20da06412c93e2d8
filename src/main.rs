use clap::Parser;
use mindmend::application::{init, list_entries, ConfigService, DeleteEntryService, LogEntryService};
use mindmend::cli::{output, Cli, Commands};
use mindmend::domain::{catalog, Mood};
use mindmend::error::MindmendError;
use mindmend::infrastructure::{EntryStore, FileSystemRepository, JournalRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MindmendError> {
    match cli.command {
        Some(Commands::Init {
            path,
            display_limit,
        }) => init::init(&path, display_limit),
        Some(Commands::Moods) => {
            print!("{}", output::format_mood_list());
            Ok(())
        }
        Some(Commands::Show { mood, any_mood }) => {
            let mood = resolve_mood(&mood, any_mood)?;
            let bundle = catalog::lookup(&mood);

            print!("{}", output::format_bundle(&mood, bundle));
            Ok(())
        }
        Some(Commands::Log {
            mood,
            note,
            any_mood,
        }) => {
            let mood = resolve_mood(&mood, any_mood)?;

            // Discover repository and build the store over its preferences
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = EntryStore::new(repo.prefs_store()).with_max_entries(config.max_entries);

            let service = LogEntryService::new(store);
            let entry = service.execute(&mood, note)?;

            print!("{}", output::format_entry_card(&entry));
            println!("\nSaved!");
            Ok(())
        }
        Some(Commands::List { limit, all }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = EntryStore::new(repo.prefs_store());

            // --all wins; otherwise an explicit limit, otherwise the config default
            let limit = if all {
                None
            } else {
                limit.or(Some(config.display_limit))
            };

            let entries = list_entries::list_entries(&store, limit)?;
            if entries.is_empty() {
                println!("{}", output::format_entry_list(&entries));
            } else {
                print!("{}", output::format_entry_list(&entries));
            }
            Ok(())
        }
        Some(Commands::Delete { position }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::new(repo.prefs_store());
            let service = DeleteEntryService::new(store);

            let entry = service.execute(position)?;
            println!(
                "Deleted {} entry from {}",
                entry.mood,
                output::format_timestamp(entry.timestamp)
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("display_limit = {}", config.display_limit);
                match config.max_entries {
                    Some(n) => println!("max_entries = {}", n),
                    None => println!("max_entries = none"),
                }
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: mindmend config [--list | <key> [<value>]]");
                println!("Valid keys: display_limit, max_entries, created");
                Ok(())
            }
        }
        None => {
            // No command, show help hint
            println!("mindmend - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Normalize a mood argument to its catalog spelling. With `any_mood` set,
/// uncataloged moods pass through as typed.
fn resolve_mood(raw: &str, any_mood: bool) -> Result<String, MindmendError> {
    match Mood::from_str(raw) {
        Ok(mood) => Ok(mood.as_str().to_string()),
        Err(_) if any_mood => Ok(raw.to_string()),
        Err(_) => Err(MindmendError::UnknownMood(raw.to_string())),
    }
}
