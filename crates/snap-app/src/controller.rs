use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snap_types::AppEvent;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::{spawn_stdin_reader, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Handles of the two long-running tasks.
///
/// The event loop finishes on `Close`; the UI runs until cancelled so it can
/// render the event loop's last replies.
pub struct AppTasks {
    pub event_loop: JoinHandle<anyhow::Result<()>>,
    pub ui: JoinHandle<anyhow::Result<()>>,
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = {
            let config = state.config.read().await;
            config.channel_capacity.max(1)
        };

        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> AppTasks {
        // Event loop
        let event_loop = tokio::spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // Terminal UI
        let ui = tokio::spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            spawn_stdin_reader(),
            self.state.config.clone(),
            self.cancel_token.child_token(),
            std::io::stdout(),
        ));

        AppTasks { event_loop, ui }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
