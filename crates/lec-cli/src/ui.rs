use std::io::IsTerminal;
use std::sync::OnceLock;

use lec_query::{Notification, NotificationKind, Notifier};

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub notifications: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        notifications: !flags.quiet,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        notifications: true,
        term_width: None,
    })
}

/// Prints mutation outcomes to stderr so stdout stays machine-readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        if !prefs().notifications {
            return;
        }
        eprintln!("{}", format_notification(&notification));
    }
}

fn format_notification(notification: &Notification) -> String {
    match (notification.kind, notification.detail.as_deref()) {
        (NotificationKind::Success, _) => format!("ok: {}", notification.title),
        (NotificationKind::Error, Some(detail)) => {
            format!("failed: {}: {detail}", notification.title)
        }
        (NotificationKind::Error, None) => format!("failed: {}", notification.title),
    }
}
