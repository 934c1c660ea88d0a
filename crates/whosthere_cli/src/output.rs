//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON_MODE.store(matches!(format, OutputFormat::Json), Ordering::Relaxed);
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

pub fn success(text: &str) {
    if is_json() {
        println!("{}", to_json("success", text, None));
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        println!("{}", to_json("warning", text, None));
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        println!("{}", to_json("info", key, Some(&data)));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// One row of the theme list.
#[derive(Debug, Serialize)]
pub struct ThemeRow {
    pub name: String,
    pub configured: bool,
}

/// Theme list as a table (JSON mode emits an items array instead).
pub fn themes_table(rows: &[ThemeRow]) {
    if is_json() {
        let data = serde_json::json!({ "items": rows });
        println!("{}", to_json("list", "themes", Some(&data)));
        return;
    }
    println!("{}", render_themes_table(rows));
}

fn render_themes_table(rows: &[ThemeRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Theme").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("").fg(Color::Cyan).add_attribute(Attribute::Bold),
        ]);
    for row in rows {
        let marker = if row.configured { "● configured" } else { "" };
        table.add_row(vec![Cell::new(&row.name).fg(Color::Green), Cell::new(marker)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_envelope_skips_missing_data() {
        assert_eq!(
            to_json("error", "boom", None),
            r#"{"level":"error","message":"boom"}"#
        );
        let data = serde_json::json!({ "path": "/x" });
        assert!(to_json("info", "path", Some(&data)).contains(r#""data":{"path":"/x"}"#));
    }

    #[test]
    fn table_marks_configured_theme() {
        let rows = vec![
            ThemeRow {
                name: "default".to_string(),
                configured: false,
            },
            ThemeRow {
                name: "nord".to_string(),
                configured: true,
            },
        ];
        let rendered = render_themes_table(&rows).to_string();
        let nord_line = rendered.lines().find(|l| l.contains("nord")).unwrap();
        assert!(nord_line.contains("● configured"));
        let default_line = rendered.lines().find(|l| l.contains("default")).unwrap();
        assert!(!default_line.contains("configured"));
    }
}
