use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use voice_notes::ui::{render, App};
use voice_notes::{Config, JsonFileStorage, NoteStore, SessionController, SpeechBackendFactory, SpeechEngine};

#[derive(Debug, Parser)]
#[command(name = "voice-notes", about = "Voice note-taking with live speech transcription")]
struct Cli {
    /// Config file (TOML), loaded with defaults when absent
    #[arg(long, default_value = "config/voice-notes")]
    config: String,

    /// Replay recognition events from a script file instead of launching
    /// the configured recognizer
    #[arg(long)]
    replay: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record notes interactively (default)
    Record,
    /// Print saved notes
    List,
    /// Delete the note at the given index
    Delete { index: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let storage = JsonFileStorage::new(&cfg.storage.path)?;
    let mut store = NoteStore::load(Box::new(storage));

    match cli.command.unwrap_or(Command::Record) {
        Command::List => {
            render::render_notes(&mut std::io::stdout(), store.notes())?;
            std::io::stdout().flush()?;
        }
        Command::Delete { index } => {
            if index >= store.len() {
                println!("No note at index {} ({} saved).", index, store.len());
            } else {
                let note = store.delete(index)?;
                println!("Deleted note [{}]: {}", index, note.text);
            }
        }
        Command::Record => {
            let engine = match cli.replay {
                Some(script) => SpeechEngine::Replay(script),
                None => SpeechEngine::Process {
                    command: cfg.speech.recognizer.clone(),
                },
            };

            let backend = SpeechBackendFactory::create(engine, cfg.speech.recognizer_config())?;

            info!("Notes stored in {}", cfg.storage.path.display());

            let controller = SessionController::new(backend, store);
            App::new(controller).run().await?;
        }
    }

    Ok(())
}
