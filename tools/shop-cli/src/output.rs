//! Output formatting for the CLI.

use console::style;
use shop_commerce::validate::FormErrors;
use shop_commerce::{Notification, NotificationKind};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    html: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool, html: bool) -> Self {
        Self {
            verbose,
            json,
            html,
        }
    }

    fn quiet(&self) -> bool {
        self.json || self.html
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.quiet() {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.quiet() {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.quiet() {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.quiet() {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.quiet() {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a storefront notification with its kind's marker.
    pub fn notification(&self, notification: &Notification) {
        let msg = format!("{}: {}", style(&notification.title).bold(), notification.message);
        match notification.kind {
            NotificationKind::Success => self.success(&msg),
            NotificationKind::Warning => self.warn(&msg),
            NotificationKind::Error => self.error(&format!("{}: {}", notification.title, notification.message)),
            NotificationKind::Info => self.info(&msg),
        }
    }

    /// Print each field message of a failed form.
    pub fn form_errors(&self, errors: &FormErrors) {
        for (field, error) in errors.iter() {
            self.kv(field.label(), &style(error).red().to_string());
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print an HTML fragment.
    pub fn html(&self, fragment: &str) {
        println!("{}", fragment);
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.quiet() {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.quiet() {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Check if HTML mode is enabled.
    pub fn is_html(&self) -> bool {
        self.html
    }
}
