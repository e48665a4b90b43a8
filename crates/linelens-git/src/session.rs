//! Hover session: request orchestration with de-duplication.

use linelens_core::{format_history, HoverPayload, LineRef};
use tokio::sync::Mutex;
use tracing::debug;

use crate::runner::HistorySource;

/// Outcome of one hover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// A freshly rendered hover body.
    Rendered(HoverPayload),
    /// Same line as the previous request; the caller keeps what it has.
    Suppressed,
}

/// One editor session's hover state: the last attempted line reference.
///
/// The reference is recorded before the query runs, so a failing query
/// never leaves the state pointing at an untried line. Only the identity
/// is remembered, never content; the caller owns whatever it last
/// displayed.
pub struct HoverSession<S> {
    source: S,
    last: Mutex<Option<LineRef>>,
}

impl<S: HistorySource> HoverSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last: Mutex::new(None),
        }
    }

    /// Handle one hover request.
    ///
    /// A repeat of the previous reference is suppressed without touching
    /// git. Anything else queries, then renders success through the
    /// formatter and failure through its fixed notice, so the result is
    /// always displayable.
    pub async fn hover(&self, reference: LineRef) -> HoverOutcome {
        {
            let mut last = self.last.lock().await;
            if last.as_ref() == Some(&reference) {
                debug!(%reference, "duplicate hover suppressed");
                return HoverOutcome::Suppressed;
            }
            *last = Some(reference.clone());
        }

        let markdown = match self.source.fetch(&reference).await {
            Ok(raw) => format_history(&raw),
            Err(err) => err.user_message(),
        };
        HoverOutcome::Rendered(HoverPayload::new(&reference, markdown))
    }
}
