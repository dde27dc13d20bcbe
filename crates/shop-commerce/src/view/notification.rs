//! Notification dialog.

use super::html_escape;
use crate::notification::Notification;

/// Render the modal overlay for a notification.
pub fn render_notification(notification: &Notification) -> String {
    format!(
        r#"<div id="notification-modal" class="notification-overlay active">
    <div class="notification-content notification-{}">
        <div class="notification-icon"><i class="{}"></i></div>
        <h3 class="notification-title">{}</h3>
        <p class="notification-text">{}</p>
        <button class="notification-btn">OK</button>
    </div>
</div>"#,
        notification.kind.as_str(),
        notification.kind.icon_class(),
        html_escape(&notification.title),
        html_escape(&notification.message),
    )
}
