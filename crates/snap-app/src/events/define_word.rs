use kanal::AsyncSender;
use snap_core::{Session, UiMode};
use snap_types::{AppEvent, View};

use crate::events::report;
use crate::state::AppState;

pub async fn handle_define_word(
    state: &AppState,
    session: &mut Session,
    word: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.set_mode(UiMode::Definition);

    let word = word.trim();
    if word.is_empty() {
        app_to_ui_tx
            .send(AppEvent::ShowError("Please enter a word to search.".to_string()))
            .await?;
        return Ok(());
    }

    tracing::info!("Searching definition for {:?}", word);

    let Some(definition) = report(state.service.define_word(word).await, app_to_ui_tx).await?
    else {
        return Ok(());
    };

    session.definition = Some(definition.clone());
    app_to_ui_tx
        .send(AppEvent::ShowView(View::Definition(definition)))
        .await?;
    Ok(())
}
