use crate::clipboard::Clipboard;
use crate::commands::CmdResult;
use crate::model::{Notification, Session};

/// Write `value` to the clipboard and raise the matching notification.
/// Clipboard failure is not an error from the caller's perspective: it is
/// collapsed into a single error-kind notification, and the user may simply
/// retry. This is the only action in the system with a failure path.
pub fn run<C: Clipboard>(
    clipboard: &mut C,
    session: &mut Session,
    value: &str,
    label: &str,
) -> CmdResult {
    let notification = match clipboard.copy(value) {
        Ok(()) => Notification::success(format!("{} copied!", label)),
        Err(_) => Notification::error("Failed to copy"),
    };
    session.notification = Some(notification.clone());
    CmdResult::default().with_notification(notification)
}
