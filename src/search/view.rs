//! View handle the controller writes through
//!
//! The controller never owns the output regions. It is handed something that
//! implements `SearchView` and pushes state changes into it.

use super::dispatch::{DisplayState, Notification};
use tokio::sync::mpsc;

/// A change the controller wants the front end to show
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Replace both output regions with this state
    Show(DisplayState),
    /// Pop a toast
    Notify(Notification),
}

/// Sink for controller output
pub trait SearchView: Send + Sync + 'static {
    /// Clear both regions, then render `state`
    fn show(&self, state: DisplayState);

    fn notify(&self, notification: Notification);
}

/// Forward updates to whichever task owns the regions (the TUI loop, or the
/// one-shot search command)
impl SearchView for mpsc::UnboundedSender<ViewUpdate> {
    fn show(&self, state: DisplayState) {
        if self.send(ViewUpdate::Show(state)).is_err() {
            tracing::debug!("View closed, dropping display update");
        }
    }

    fn notify(&self, notification: Notification) {
        if self.send(ViewUpdate::Notify(notification)).is_err() {
            tracing::debug!("View closed, dropping notification");
        }
    }
}
