use clap::{CommandFactory, Parser};
use moodlog::application::{check_entry, list_entries, mood_stats, AddEntryService};
use moodlog::cli::{self, Cli, Commands};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{engines, Config, EntryRepository, JsonEntryRepository};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOODLOG_LOG";

fn main() {
    init_logging();

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

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository() -> Result<JsonEntryRepository, MoodlogError> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    Ok(JsonEntryRepository::new(config.data_path(&cwd)))
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Engines load once, up front; a failure here is fatal
    let analyzer = engines::init()?;

    match command {
        Commands::Add { text } => {
            let repo = open_repository()?;
            let service = AddEntryService::new(repo, analyzer);
            let saved = service.execute(&text)?;

            println!("{}", cli::format_saved_entry(&saved.entry));
            if !saved.persisted {
                eprintln!("Warning: the entry could not be written to the journal file");
            }
            Ok(())
        }
        Commands::Last { n } => {
            let repo = open_repository()?;
            let entries = list_entries(&repo, n as usize);
            println!("{}", cli::format_entry_list(&entries));
            Ok(())
        }
        Commands::Stats { n } => {
            let repo = open_repository()?;
            let stats = mood_stats(&repo, n as usize);
            println!("{}", cli::format_stats(&stats));
            Ok(())
        }
        Commands::Check { text } => {
            let report = check_entry(analyzer, &text);
            print!("{}", cli::format_check_report(&report));
            Ok(())
        }
        Commands::Clear => {
            let repo = open_repository()?;
            if repo.clear() {
                println!("All entries cleared.");
                Ok(())
            } else {
                Err(MoodlogError::Storage(format!(
                    "Could not write journal file: {}",
                    repo.path().display()
                )))
            }
        }
    }
}
