//! Tracing layer that forwards each event as one line to a [LogSink].
//!
//! Line format: `[LEVEL] target: message key=value ...`

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Longest line forwarded; longer lines are cut and suffixed with their length.
const MAX_LINE_LEN: usize = 4_000;

/// Collects the message first, then `key=value` pairs in record order.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Debug) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={:?}", name, value).ok();
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), value);
        }
    }
}

fn format_line(level: &tracing::Level, target: &str, body: &str) -> String {
    let line = if body.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, body)
    };
    if line.chars().count() > MAX_LINE_LEN {
        let cut: String = line.chars().take(MAX_LINE_LEN).collect();
        format!("{}… ({} chars)", cut, line.chars().count())
    } else {
        line
    }
}

/// Layer that sends each formatted event to `sink` when present. The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        sink(format_line(metadata.level(), metadata.target(), &visitor.finish()));
    }
}
