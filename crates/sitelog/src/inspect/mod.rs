//! Payload inspection
//!
//! Renders [`Value`]s into text. Lists and records are tracked by identity for
//! the whole rendering pass: the second time a handle is reached it is
//! replaced with [`SEEN_MARKER`], which also makes self-referencing values
//! safe to render.

mod options;
mod value;

use std::collections::HashSet;

pub use options::InspectOptions;
pub use value::{List, Record, Value};

/// Marker emitted in place of a list or record already rendered in this pass
pub const SEEN_MARKER: &str = "[Already seen]";

const INDENT: &str = "  ";

/// Render a single value as it would appear nested inside a payload
pub fn inspect(value: &Value, options: &InspectOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.value(value, 0);
    renderer.out
}

/// Render a payload: arguments joined by a single space
///
/// Top-level strings are written raw; everything else goes through
/// [`inspect`]. One identity set is shared across all arguments.
pub fn format_args(args: &[Value], options: &InspectOptions) -> String {
    let mut renderer = Renderer::new(options);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            renderer.out.push(' ');
        }
        match arg {
            Value::Str(s) => renderer.out.push_str(s),
            other => renderer.value(other, 0),
        }
    }
    renderer.out
}

/// Text shown for a container cut off by the depth limit
fn placeholder(kind: &str) -> String {
    format!("[{kind}]")
}

struct Renderer<'a> {
    options: &'a InspectOptions,
    seen: HashSet<usize>,
    out: String,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a InspectOptions) -> Self {
        Self {
            options,
            seen: HashSet::new(),
            out: String::new(),
        }
    }

    fn value(&mut self, value: &Value, level: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => self.out.push_str(&i.to_string()),
            Value::UInt(u) => self.out.push_str(&u.to_string()),
            Value::Float(f) => self.float(*f),
            Value::Str(s) => self.quoted(s),
            Value::Opaque(s) => self.out.push_str(s),
            Value::List(list) => {
                if self.enter(list.id(), &placeholder(value.kind()), level) {
                    self.list(&list.items(), level);
                }
            }
            Value::Record(record) => {
                let name = record.name();
                let cutoff = placeholder(name.as_deref().unwrap_or(value.kind()));
                if self.enter(record.id(), &cutoff, level) {
                    self.record(record.name(), record.fields(), level);
                }
            }
        }
    }

    /// Mark a container as visited; returns false when it must not be expanded
    fn enter(&mut self, id: usize, placeholder: &str, level: usize) -> bool {
        if self.seen.contains(&id) {
            self.out.push_str(SEEN_MARKER);
            return false;
        }
        if self.options.depth.is_some_and(|depth| level > depth) {
            self.out.push_str(placeholder);
            return false;
        }
        self.seen.insert(id);
        true
    }

    fn float(&mut self, f: f64) {
        if f.is_nan() {
            self.out.push_str("NaN");
        } else if f.is_infinite() {
            self.out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
        } else {
            self.out.push_str(&f.to_string());
        }
    }

    fn quoted(&mut self, s: &str) {
        self.out.push('\'');
        for c in s.chars() {
            match c {
                '\'' => self.out.push_str("\\'"),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c => self.out.push(c),
            }
        }
        self.out.push('\'');
    }

    fn key(&mut self, key: &str) {
        let bare = key
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && key.chars().all(|c| c.is_alphanumeric() || c == '_');
        if bare {
            self.out.push_str(key);
        } else {
            self.quoted(key);
        }
    }

    fn list(&mut self, items: &[Value], level: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        let shown = self
            .options
            .max_list_len
            .map_or(items.len(), |max| max.min(items.len()));
        let hidden = items.len() - shown;

        self.out.push('[');
        for (i, item) in items[..shown].iter().enumerate() {
            self.separator(i, level);
            self.value(item, level + 1);
        }
        if hidden > 0 {
            self.separator(shown, level);
            let noun = if hidden == 1 { "item" } else { "items" };
            self.out.push_str(&format!("... {hidden} more {noun}"));
        }
        self.close(']', level);
    }

    fn record(&mut self, name: Option<String>, mut fields: Vec<(String, Value)>, level: usize) {
        if let Some(name) = &name {
            self.out.push_str(name);
            self.out.push(' ');
        }
        if fields.is_empty() {
            self.out.push_str("{}");
            return;
        }
        if self.options.sort_keys {
            fields.sort_by(|a, b| a.0.cmp(&b.0));
        }

        self.out.push('{');
        for (i, (key, value)) in fields.iter().enumerate() {
            self.separator(i, level);
            self.key(key);
            self.out.push_str(": ");
            self.value(value, level + 1);
        }
        self.close('}', level);
    }

    /// Whitespace before the `index`-th entry of a container at `level`
    fn separator(&mut self, index: usize, level: usize) {
        if index > 0 {
            self.out.push(',');
        }
        if self.options.compact {
            self.out.push(' ');
        } else {
            self.out.push('\n');
            self.indent(level + 1);
        }
    }

    fn close(&mut self, bracket: char, level: usize) {
        if self.options.compact {
            self.out.push(' ');
        } else {
            self.out.push('\n');
            self.indent(level);
        }
        self.out.push(bracket);
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(INDENT);
        }
    }
}
