use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use crate::tui::draw::draw;
use crate::tui::input::handle_draft_key;
use crate::tui::state::App;

/// Runtime options for the chat session.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Start with echo mode enabled.
    pub echo: bool,
    /// Delay before a simulated incoming message arrives.
    pub echo_delay: Duration,
}

// ── Entry point ───────────────────────────────────────────────────────────────

pub async fn run(options: Options) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(options.echo);
    let result = event_loop(&mut terminal, &mut app, options.echo_delay).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

// ── Event loop ────────────────────────────────────────────────────────────────

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    echo_delay: Duration,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(50));
    // Channel for simulated incoming messages: senders given to spawned echo
    // tasks, receiver polled here.
    let (incoming_tx, mut incoming_rx) = mpsc::unbounded_channel::<String>();

    loop {
        // React to log changes before drawing so a fresh append lands with
        // the view pinned to the newest entry.
        app.observe_log();
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            // 50 ms tick — redraws and clears timed status messages
            _ = tick.tick() => {
                if let Some(set_at) = app.status_set_at {
                    if set_at.elapsed() >= Duration::from_secs(3) {
                        app.status = String::new();
                        app.status_set_at = None;
                    }
                }
            }

            // Simulated incoming message: identical append, different caller
            Some(text) = incoming_rx.recv() => {
                app.receive(&text);
            }

            // Keyboard / terminal events
            Some(Ok(event)) = event_stream.next() => {
                if let Event::Mouse(mouse) = &event {
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.scroll_up(3),
                        MouseEventKind::ScrollDown => app.scroll_down(3),
                        _ => {}
                    }
                }
                if let Event::Key(key) = event {
                    match key.code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::F(2) => app.toggle_echo(),
                        KeyCode::PageUp => app.scroll_up(5),
                        KeyCode::PageDown => app.scroll_down(5),
                        KeyCode::Up if key.modifiers.contains(KeyModifiers::ALT) => app.scroll_up(1),
                        KeyCode::Down if key.modifiers.contains(KeyModifiers::ALT) => app.scroll_down(1),
                        KeyCode::End => app.end_key(),
                        KeyCode::Enter => {
                            // Commit trigger; a whitespace-only draft is a
                            // silent no-op and the draft stays put.
                            if let Some(sent) = app.submit() {
                                if app.echo {
                                    let tx = incoming_tx.clone();
                                    let text = sent.text;
                                    tokio::spawn(async move {
                                        tokio::time::sleep(echo_delay).await;
                                        let _ = tx.send(text);
                                    });
                                }
                            }
                        }
                        _ => handle_draft_key(&mut app.input.draft, key),
                    }
                }
            }
        }
    }
}
