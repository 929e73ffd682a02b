use kanal::AsyncSender;
use snap_core::{Session, UiMode};
use snap_types::{AppEvent, View};

use crate::events::report;
use crate::state::AppState;

pub async fn handle_quote(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.set_mode(UiMode::Quote);
    status(app_to_ui_tx, "Generating a random quote...").await;

    let Some(quote) = report(state.service.random_quote().await, app_to_ui_tx).await? else {
        return Ok(());
    };

    let words = state.rank_text(&quote.text).await;
    tracing::info!("Quote by {} with {} unique words", quote.author, words.len());

    session.quote = Some(quote.clone());
    session.set_words(words.clone());

    app_to_ui_tx
        .send(AppEvent::ShowView(View::Quote { quote, words }))
        .await?;
    Ok(())
}

pub async fn handle_knowledge(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.set_mode(UiMode::Knowledge);
    status(app_to_ui_tx, "Generating a piece of knowledge...").await;

    let Some(knowledge) = report(state.service.random_knowledge().await, app_to_ui_tx).await?
    else {
        return Ok(());
    };

    let words = state.rank_text(&knowledge.knowledge).await;

    session.knowledge = Some(knowledge.clone());
    session.set_words(words.clone());

    app_to_ui_tx
        .send(AppEvent::ShowView(View::Knowledge { knowledge, words }))
        .await?;
    Ok(())
}

pub async fn handle_book(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.set_mode(UiMode::Book);
    status(app_to_ui_tx, "Picking a random book...").await;

    let Some(book) = report(state.service.random_book().await, app_to_ui_tx).await? else {
        return Ok(());
    };

    // the excerpt is the text worth studying; the intro is a summary
    let words = state.rank_text(&book.excerpt).await;
    tracing::info!("Book {:?} with {} unique excerpt words", book.title, words.len());

    session.book = Some(book.clone());
    session.set_words(words.clone());

    app_to_ui_tx
        .send(AppEvent::ShowView(View::Book { book, words }))
        .await?;
    Ok(())
}

async fn status(app_to_ui_tx: &AsyncSender<AppEvent>, message: &str) {
    let _ = app_to_ui_tx
        .send(AppEvent::ShowStatus(message.to_string()))
        .await;
}
