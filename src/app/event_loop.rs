//! The select loop that drives an [`App`].

use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::{App, AppMessage};
use crate::ui;

/// Housekeeping cadence. Drives the spinner and picks up rotation updates.
pub const UI_TICK: Duration = Duration::from_millis(250);

/// Run until the app asks to quit or `events` ends.
///
/// Ticks come from one interval for the whole loop, so a steady stream of
/// input cannot starve them.
pub async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>>,
{
    let mut events = std::pin::pin!(events);

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ui_tick = tokio::time::interval(UI_TICK);
    ui_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ui_tick.tick() => {
                app.tick();
            }

            event_result = events.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.paste(&text);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
