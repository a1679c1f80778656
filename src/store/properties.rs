//! Line-oriented property-file editing.
//!
//! The store is rewritten on every update, so untouched lines (comments,
//! blank lines, unrelated keys) must survive byte-for-byte. A targeted `set`
//! replaces only the value part of the matching line and leaves the key,
//! separator, and surrounding whitespace exactly as read.

#[derive(Debug, Clone)]
enum Line {
    /// Comment, blank line, or anything that does not parse as a pair.
    Raw(String),
    Pair {
        key: String,
        /// Everything up to the first non-blank character of the value,
        /// exactly as read (key, separator, whitespace).
        prefix: String,
        value: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PropertiesFile {
    lines: Vec<Line>,
}

impl PropertiesFile {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            lines: input.lines().map(parse_line).collect(),
        }
    }

    /// Trimmed value of `key`, if the file carries it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value, .. } if k == key => Some(value.trim_end()),
            _ => None,
        })
    }

    /// Update `key` in place, or append a new pair when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Pair { key: k, value: v, .. } = line {
                if k == key {
                    *v = value.to_string();
                    return;
                }
            }
        }
        self.lines.push(Line::Pair {
            key: key.to_string(),
            prefix: format!("{key} = "),
            value: value.to_string(),
        });
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Raw(raw) => out.push_str(raw),
                Line::Pair { prefix, value, .. } => {
                    out.push_str(prefix);
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }
}

fn parse_line(raw: &str) -> Line {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return Line::Raw(raw.to_string());
    }
    let Some(sep) = raw.find(['=', ':']) else {
        return Line::Raw(raw.to_string());
    };
    let key = raw[..sep].trim();
    if key.is_empty() {
        return Line::Raw(raw.to_string());
    }
    let value_start = raw[sep + 1..]
        .find(|c: char| !c.is_whitespace())
        .map_or(raw.len(), |offset| sep + 1 + offset);
    Line::Pair {
        key: key.to_string(),
        prefix: raw[..value_start].to_string(),
        value: raw[value_start..].to_string(),
    }
}
