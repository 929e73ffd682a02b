use kanal::AsyncSender;
use snap_core::Session;
use snap_types::{AppEvent, View};

use crate::events::report;
use crate::state::AppState;

/// Definition of a word clicked in the word table. Shown in the sidebar, so
/// the expanded section stays as it is.
pub async fn handle_snapshot(
    state: &AppState,
    session: &mut Session,
    selector: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(word) = session.find_word(selector).map(|w| w.word.clone()) else {
        let message = if session.words.is_empty() {
            "No words on the page yet. Generate a quote, some knowledge or a book first.".to_string()
        } else {
            format!("No word {:?} in the word table.", selector.trim())
        };
        app_to_ui_tx.send(AppEvent::ShowError(message)).await?;
        return Ok(());
    };

    tracing::info!("Word snapshot for {:?}", word);

    let Some(definition) = report(state.service.define_word(&word).await, app_to_ui_tx).await?
    else {
        return Ok(());
    };

    session.snapshot = Some(definition.clone());
    app_to_ui_tx
        .send(AppEvent::ShowView(View::Snapshot(definition)))
        .await?;
    Ok(())
}
