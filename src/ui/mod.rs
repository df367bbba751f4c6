pub mod app;
pub mod events;
pub mod render;
pub mod theme;

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use scopeguard::defer;

use crate::api::GenerationClient;
use crate::player::VideoPlayer;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};

/// Run the interactive UI until the user quits.
///
/// Terminal state is restored by a scope guard, so raw mode and the
/// alternate screen are torn down on every exit path, panics included.
pub fn run(
    client: GenerationClient,
    player: Box<dyn VideoPlayer>,
    runtime: tokio::runtime::Handle,
) -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableBracketedPaste)?;
    defer! {
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, player, events.sender(), runtime);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Redrawn on the next pass; nothing to recompute.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Settled(settled)) => app.on_settled(settled),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
