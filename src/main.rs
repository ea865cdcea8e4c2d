use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;
use vibecheck::config::env_loader::load_config;
use vibecheck::controller::{Outcome, SubmissionController};
use vibecheck::input::{Flow, Form, PlaylistForm, PreferencesForm};
use vibecheck::matcher::api::MatcherAPI;
use vibecheck::page::Page;
use vibecheck::tracing::setup_tracing;

/// Finds events matching a Spotify playlist or a set of genres
#[derive(Parser, Debug)]
#[command(version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,

    /// City to search in (defaults to DEFAULT_CITY)
    #[arg(long, global = true)]
    city: Option<String>,

    /// How many keywords the matcher should use
    #[arg(long, global = true)]
    top_n: Option<u32>,

    /// Where to write the results page (stdout if omitted)
    #[arg(long, global = true)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match events against a playlist URL or ID
    Playlist { playlist_url: String },
    /// Match events against comma separated genres
    Preferences {
        #[arg(long)]
        genre: String,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        when: Option<String>,
    },
}

impl CliArgs {
    fn to_form(&self) -> Form {
        match &self.command {
            Command::Playlist { playlist_url } => Form::Playlist(PlaylistForm {
                playlist_url: Some(playlist_url.clone()),
                location: self.city.clone(),
            }),
            Command::Preferences {
                genre,
                budget,
                when,
            } => Form::Preferences(PreferencesForm {
                location: self.city.clone(),
                genre: Some(genre.clone()),
                budget: budget.clone(),
                when: when.clone(),
            }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse();
    let loki = setup_tracing().await;

    let mut config = load_config();

    if let Some(top_n) = cli_args.top_n {
        config.defaults.top_n = top_n;
    }

    let page = Arc::new(Mutex::new(Page::new(&[Flow::Playlist, Flow::Preferences])));
    let controller =
        SubmissionController::new(MatcherAPI::new(config.matcher), config.defaults, page);

    let outcome = controller.submit(&cli_args.to_form()).await;

    info!("Submission finished: {:?}", outcome);

    let html = controller
        .page()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .render()
        .into_string();

    match &cli_args.out {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            info!("Results written to {}", path.display());
        }
        None => println!("{}", html),
    }

    if let Some((loki_controller, handle)) = loki {
        loki_controller.shutdown().await;
        handle.await?;
    }

    if outcome == Outcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
