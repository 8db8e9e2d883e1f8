//! Features - Vertical Feature Slices
//!
//! Each feature pairs a controller (store calls and user actions) with a
//! page (text rendering of a store snapshot).

pub mod dashboard;
pub mod history;
pub mod insights;

use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;

use crate::error::Result;
use crate::i18n::{Locale, t};
use crate::states::UIEvent;
use crate::utils::export::write_export;

/// Write an export and publish the matching toast
pub(crate) fn finish_export<C: AsRef<[u8]>>(
    events: &Sender<UIEvent>,
    locale: Locale,
    contents: Result<C>,
    dir: &Path,
    file_name: &str,
    success_key: &str,
) -> Option<PathBuf> {
    let written = contents.and_then(|contents| write_export(dir, file_name, &contents));
    let (event, path) = match written {
        Ok(path) => (UIEvent::success(t(locale, success_key)), Some(path)),
        Err(e) => {
            tracing::error!(error = %e, file = file_name, "Export failed");
            (UIEvent::error(t(locale, "toast-export-failed")), None)
        }
    };
    notify(events, event);
    path
}

/// Publish a toast from a view action
pub(crate) fn notify(events: &Sender<UIEvent>, event: UIEvent) {
    if events.send(event).is_err() {
        tracing::debug!("No UI listener for view event");
    }
}

/// `label ..... value` line used by stat cards
pub(crate) fn stat_line(label: &str, value: &str) -> String {
    format!("  {} {value}", crate::utils::format::column(label, 26))
}
