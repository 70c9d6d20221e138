//! Main TUI event loop
//!
//! Drives the app state machine: terminal events and timer messages go
//! through `update`, actions returned by `update` are executed here. The
//! scan timer is the only side effect; it lives as an abortable tokio
//! task so a cancel request can stop a pending completion.

use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use scanalert_app::{update, AppConfig, AppState, Message, UpdateAction};
use scanalert_core::prelude::*;

use crate::{event, render};

/// Pending scan timer, abortable on cancel
struct ScanTimer {
    handle: Option<JoinHandle<()>>,
}

impl ScanTimer {
    fn new() -> Self {
        Self { handle: None }
    }

    /// Start a one-shot timer that sends `ScanCompleted` when it fires.
    /// A previous pending timer is aborted first.
    fn start(&mut self, duration: std::time::Duration, tx: mpsc::UnboundedSender<Message>) {
        self.abort();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(Message::ScanCompleted).is_err() {
                debug!("Scan timer fired after event loop shut down");
            }
        }));
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScanTimer {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Chain a terminal restore in front of the default panic hook so a panic
/// mid-draw does not leave the shell in raw mode
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        default_hook(info);
    }));
}

/// Run the TUI until the user quits
pub async fn run(config: AppConfig) -> Result<()> {
    install_panic_hook();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, config);

    ratatui::restore();
    result
}

fn run_loop(term: &mut DefaultTerminal, config: AppConfig) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut state = AppState::with_config(config);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = ScanTimer::new();

    // Ctrl-C from outside the raw-mode keyboard (e.g. kill -INT) still
    // lands as a clean quit
    let signal_tx = tx.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(Message::Quit);
        }
    });

    info!("Event loop started");

    loop {
        term.draw(|frame: &mut Frame| render::view(frame, &state))?;

        // Timer messages first, then one poll for terminal input. The poll
        // timeout doubles as the tick cadence.
        while let Ok(message) = rx.try_recv() {
            process(&mut state, message, &tx, &mut timer);
        }

        if let Some(message) = event::poll(tick_rate)? {
            process(&mut state, message, &tx, &mut timer);
        }

        if state.should_quit() {
            info!("Quit requested, shutting down");
            break;
        }
    }

    signal_task.abort();
    Ok(())
}

/// Run a message through update, executing actions and follow-ups
fn process(
    state: &mut AppState,
    message: Message,
    tx: &mpsc::UnboundedSender<Message>,
    timer: &mut ScanTimer,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);

        if let Some(action) = result.action {
            match action {
                UpdateAction::StartScanTimer { duration } => {
                    timer.start(duration, tx.clone());
                }
                UpdateAction::CancelScanTimer => {
                    timer.abort();
                }
            }
        }

        next = result.message;
    }
}
