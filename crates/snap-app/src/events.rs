use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snap_core::{Session, UiMode};
use snap_lang_english::SnapError;
use snap_types::{AppEvent, UiEvent, View};

use crate::state::AppState;

pub mod define_word;
pub mod generate;
pub mod snapshot;

use define_word::handle_define_word;
use generate::{handle_book, handle_knowledge, handle_quote};
use snapshot::handle_snapshot;

/// App's main loop. Handles one event at a time, so at most one generation
/// request is ever in flight.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    loop {
        let event = match ui_to_app_rx.recv().await {
            Ok(event) => event,
            Err(_) => {
                tracing::info!("[EVENT_LOOP] UI channel closed");
                return Ok(());
            }
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);

        if let AppEvent::UiEvent(UiEvent::Close) = event {
            tracing::info!("[EVENT_LOOP] Close requested");
            return Ok(());
        }

        handle_events(&state, &mut session, &app_to_ui_tx, event).await?;
    }
}

pub async fn handle_events(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    let AppEvent::UiEvent(event) = event else {
        // ShowView, ShowError and friends flow app -> UI only
        return Ok(());
    };

    match event {
        UiEvent::Home => {
            session.set_mode(UiMode::Home);
            let view = View::Home {
                configured: state.service.is_configured(),
            };
            app_to_ui_tx.send(AppEvent::ShowView(view)).await?;
        }
        UiEvent::RequestQuote => handle_quote(state, session, app_to_ui_tx).await?,
        UiEvent::RequestKnowledge => handle_knowledge(state, session, app_to_ui_tx).await?,
        UiEvent::RequestBook => handle_book(state, session, app_to_ui_tx).await?,
        UiEvent::Define(word) => handle_define_word(state, session, &word, app_to_ui_tx).await?,
        UiEvent::Snapshot(selector) => {
            handle_snapshot(state, session, &selector, app_to_ui_tx).await?
        }
        UiEvent::ShowWords => {
            app_to_ui_tx
                .send(AppEvent::ShowView(View::Words(session.words.clone())))
                .await?;
        }
        UiEvent::Help => app_to_ui_tx.send(AppEvent::ShowView(View::Help)).await?,
        UiEvent::Close => {}
    }

    Ok(())
}

/// Unwrap a service result, reporting failure to the UI.
///
/// `None` means the error was already shown and there are no fields to use.
pub async fn report<T>(
    result: Result<T, SnapError>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Request failed: {}", e);
            app_to_ui_tx.send(AppEvent::ShowError(e.to_string())).await?;
            Ok(None)
        }
    }
}
