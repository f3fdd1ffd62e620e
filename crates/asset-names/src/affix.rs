//! Prefix/suffix rewriters and the small cleanup steps the formatters share.

use std::ops::Range;

use fancy_regex::Regex;
use lazy_static::lazy_static;

use crate::pattern::AffixPattern;

lazy_static! {
    static ref FILE_EXT: Regex = Regex::new(r"\.[a-zA-Z0-9]+$").unwrap();
    static ref REPEATED_UNDERSCORES: Regex = Regex::new(r"_{2,}").unwrap();
}

impl AffixPattern {
    /// Deletes the matched prefix span, separator included.
    pub fn remove_prefix(&self, name: &str) -> String {
        match self.prefix_span(name) {
            Some(span) => splice(name, span, ""),
            None => name.to_string(),
        }
    }

    /// Deletes the matched suffix span, leading marker included.
    pub fn remove_suffix(&self, name: &str) -> String {
        match self.suffix_span(name) {
            Some(span) => splice(name, span, ""),
            None => name.to_string(),
        }
    }

    /// Makes `name` start with `target`.
    ///
    /// A name that already starts with `target` is returned as is. Otherwise
    /// the matched prefix span is replaced by `target`, and when nothing
    /// matched `target` is prepended.
    pub fn format_prefix(&self, name: &str, target: &str) -> String {
        if name.starts_with(target) {
            return name.to_string();
        }
        match self.prefix_span(name) {
            Some(span) => splice(name, span, target),
            None => format!("{target}{name}"),
        }
    }

    /// Makes `name` end with `target`, mirroring [`AffixPattern::format_prefix`].
    pub fn format_suffix(&self, name: &str, target: &str) -> String {
        if name.ends_with(target) {
            return name.to_string();
        }
        match self.suffix_span(name) {
            Some(span) => splice(name, span, target),
            None => format!("{name}{target}"),
        }
    }
}

fn splice(name: &str, span: Range<usize>, replacement: &str) -> String {
    let mut spliced = String::with_capacity(name.len() + replacement.len());
    spliced.push_str(&name[..span.start]);
    spliced.push_str(replacement);
    spliced.push_str(&name[span.end..]);
    spliced
}

pub fn remove_prefix(name: &str, token: &str) -> String {
    AffixPattern::new(token).remove_prefix(name)
}

pub fn remove_suffix(name: &str, token: &str) -> String {
    AffixPattern::new(token).remove_suffix(name)
}

pub fn format_prefix(name: &str, target_prefix: &str, token: &str) -> String {
    AffixPattern::new(token).format_prefix(name, target_prefix)
}

pub fn format_suffix(name: &str, target_suffix: &str, token: &str) -> String {
    AffixPattern::new(token).format_suffix(name, target_suffix)
}

/// Strips a trailing `.ext` made of ASCII letters and digits.
pub fn remove_file_ext(name: &str) -> &str {
    match FILE_EXT.find(name) {
        Ok(Some(ext)) => &name[..ext.start()],
        _ => name,
    }
}

/// Collapses every run of two or more underscores into one.
pub fn collapse_underscores(name: &str) -> String {
    REPEATED_UNDERSCORES.replace_all(name, "_").into_owned()
}

/// Trims spaces and underscores from both ends.
pub fn trim_separators(name: &str) -> &str {
    name.trim_matches(|c| c == ' ' || c == '_')
}
