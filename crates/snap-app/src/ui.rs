use std::io::{BufRead, Write};
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snap_config::Config;
use snap_types::{AppEvent, UiEvent};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::commands::parse_command;
use crate::render::render_event;

/// Terminal page: turns input lines into UI events, writes whatever the app
/// sends to `out`.
///
/// After `quit` or end of input the loop stops reading but keeps rendering,
/// so replies to requests sent before `Close` still reach the page. It ends
/// when cancelled or when the app side drops its sender.
pub async fn ui_loop<W: Write>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    input_rx: AsyncReceiver<String>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
    out: W,
) -> anyhow::Result<()> {
    let (max_words, show_prompt) = {
        let config = config.read().await;
        (config.ui.max_words, config.ui.show_prompt)
    };
    let mut page = Page {
        out,
        max_words,
        show_prompt: show_prompt && atty::is(atty::Stream::Stdin),
    };
    let mut closing = false;

    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] App channel closed");
                    break;
                };
                let ready = matches!(event, AppEvent::BackendReady);
                page.render(&event)?;
                if ready && !closing {
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Home)).await?;
                } else if !closing && !matches!(event, AppEvent::ShowStatus(_)) {
                    page.prompt()?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("[UI] Cancelled");
                // flush replies that are already queued
                while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
                    page.render(&event)?;
                }
                break;
            }
            line = input_rx.recv(), if !closing => {
                let Ok(line) = line else {
                    tracing::debug!("[UI] End of input");
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    closing = true;
                    continue;
                };
                match parse_command(&line) {
                    Ok(Some(event)) => {
                        closing = event == UiEvent::Close;
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                    }
                    Ok(None) => page.prompt()?,
                    Err(message) => {
                        writeln!(page.out, "{message}\n")?;
                        page.prompt()?;
                    }
                }
            }
        }
    }

    Ok(())
}

struct Page<W: Write> {
    out: W,
    max_words: usize,
    show_prompt: bool,
}

impl<W: Write> Page<W> {
    fn render(&mut self, event: &AppEvent) -> std::io::Result<()> {
        if let Some(text) = render_event(event, self.max_words) {
            writeln!(self.out, "{text}\n")?;
        }
        self.out.flush()
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        if self.show_prompt {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Read stdin on a plain thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::unbounded_async::<String>();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.try_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("[UI] Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        // dropping tx closes the channel, which the UI loop reads as end of input
    });

    rx
}

