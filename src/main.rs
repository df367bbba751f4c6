use anyhow::Context;
use clap::Parser;

use animagen::api::GenerationClient;
use animagen::args::Args;
use animagen::config::Config;
use animagen::generation::{GenerationState, Outcome, RequestController};
use animagen::player::{NoPlayer, SystemPlayer, VideoPlayer};
use animagen::{logging, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    if args.no_play {
        config.player.autoplay = false;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = GenerationClient::new(&config.server)?;
    let player: Box<dyn VideoPlayer> = if config.player.autoplay {
        Box::new(SystemPlayer::new(&config.player))
    } else {
        Box::new(NoPlayer)
    };

    match args.prompt {
        Some(prompt) => run_once(&runtime, client, player, &prompt),
        None => {
            ui::run(client, player, runtime.handle().clone())?;
            Ok(())
        }
    }
}

/// Headless mode: one cycle, result on stdout/stderr, exit code says how
/// it went.
fn run_once(
    runtime: &tokio::runtime::Runtime,
    client: GenerationClient,
    player: Box<dyn VideoPlayer>,
    prompt: &str,
) -> anyhow::Result<()> {
    let mut controller = RequestController::new(client, player);

    match runtime.block_on(controller.submit(prompt)) {
        GenerationState::Resolved(Outcome::Success { video_url }) => {
            println!("{video_url}");
            Ok(())
        }
        GenerationState::Resolved(Outcome::Failure { message }) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        // submit always settles; anything else would be a bug upstream.
        other => anyhow::bail!("request did not settle: {other:?}"),
    }
}
