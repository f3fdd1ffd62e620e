//! Prefix and suffix matchers built from capture tokens.
//!
//! A capture token such as `"animation"` stands for every case variant and
//! abbreviation a marketplace or DCC export might use for that word
//! (`Anim`, `ANIM`, `anm`, `Animation`, ...). The token is turned into two
//! character-class patterns:
//!
//! * prefix: `^([aA][nimationNIMATION]*(?![a-z]))(\s|_)?`
//! * suffix: `(([A-Z]|\s|_)[animationANIMATION]{1,})$`
//!
//! The lookahead in the prefix matcher keeps a token from eating the start of
//! an unrelated lowercase word. The leading `[A-Z]|\s|_` of the suffix matcher
//! lets it find a word glued onto camel-case text (`SomeTextureNormal`).

use std::ops::Range;

use fancy_regex::Regex;

use crate::error::PatternError;

/// Builds the prefix pattern source for `token`, or `None` for an empty token.
pub fn prefix_regex(token: &str) -> Option<String> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let rest: String = chars.collect();

    let first_variants = format!("{}{}", first.to_lowercase(), first.to_uppercase());
    let mut pattern = format!("^([{}]", class_body(&first_variants));
    if !rest.is_empty() {
        let rest_variants = format!("{}{}", rest.to_lowercase(), rest.to_uppercase());
        pattern.push_str(&format!("[{}]*", class_body(&rest_variants)));
    }
    pattern.push_str(r"(?![a-z]))(\s|_)?");
    Some(pattern)
}

/// Builds the suffix pattern source for `token`, or `None` for an empty token.
pub fn suffix_regex(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let variants = format!("{}{}", token.to_lowercase(), token.to_uppercase());
    Some(format!(r"(([A-Z]|\s|_)[{}]{{1,}})$", class_body(&variants)))
}

// Anything that is not alphanumeric goes in as a hex escape so that `]`, `-`,
// `^` or `\` in a basename stay literal members of the class.
fn class_body(chars: &str) -> String {
    let mut body = String::with_capacity(chars.len());
    for c in chars.chars() {
        if c.is_alphanumeric() {
            body.push(c);
        } else {
            body.push_str(&format!("\\x{{{:X}}}", c as u32));
        }
    }
    body
}

/// Compiled prefix/suffix matchers for one capture token.
#[derive(Debug, Clone)]
pub struct AffixPattern {
    token: String,
    prefix: Option<Regex>,
    suffix: Option<Regex>,
}

impl AffixPattern {
    /// Compiles both matchers for `token`.
    pub fn try_new(token: &str) -> Result<Self, PatternError> {
        let (Some(prefix), Some(suffix)) = (prefix_regex(token), suffix_regex(token)) else {
            return Err(PatternError::EmptyToken);
        };

        let compile = |source: &str| {
            Regex::new(source).map_err(|err| PatternError::Compile {
                token: token.to_string(),
                source: Box::new(err),
            })
        };

        Ok(Self {
            token: token.to_string(),
            prefix: Some(compile(&prefix)?),
            suffix: Some(compile(&suffix)?),
        })
    }

    /// Like [`AffixPattern::try_new`], but a token that cannot be compiled
    /// yields a pattern that never matches.
    pub fn new(token: &str) -> Self {
        match Self::try_new(token) {
            Ok(pattern) => pattern,
            Err(PatternError::EmptyToken) => {
                tracing::trace!("empty capture token, using inert pattern");
                Self::inert(token)
            }
            Err(err) => {
                tracing::warn!("{} (token: {:?})", err, token);
                Self::inert(token)
            }
        }
    }

    fn inert(token: &str) -> Self {
        Self {
            token: token.to_string(),
            prefix: None,
            suffix: None,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Byte range of the prefix span (token variant plus separator) in `name`.
    pub fn prefix_span(&self, name: &str) -> Option<Range<usize>> {
        self.prefix.as_ref().and_then(|regex| locate(regex, name))
    }

    /// Byte range of the suffix span (leading marker plus token variant).
    pub fn suffix_span(&self, name: &str) -> Option<Range<usize>> {
        self.suffix.as_ref().and_then(|regex| locate(regex, name))
    }

    pub fn has_prefix(&self, name: &str) -> bool {
        self.prefix_span(name).is_some()
    }

    pub fn has_suffix(&self, name: &str) -> bool {
        self.suffix_span(name).is_some()
    }
}

fn locate(regex: &Regex, haystack: &str) -> Option<Range<usize>> {
    match regex.find(haystack) {
        Ok(found) => found.map(|m| m.start()..m.end()),
        Err(source) => {
            let err = PatternError::Match {
                source: Box::new(source),
            };
            tracing::warn!("{} (input: {:?}), treating as no match", err, haystack);
            None
        }
    }
}

/// Whether `name` starts with a variant of `token`.
pub fn has_prefix(name: &str, token: &str) -> bool {
    AffixPattern::new(token).has_prefix(name)
}

/// Whether `name` ends with a variant of `token`.
pub fn has_suffix(name: &str, token: &str) -> bool {
    AffixPattern::new(token).has_suffix(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_regex_shape() {
        assert_eq!(
            prefix_regex("animation").as_deref(),
            Some(r"^([aA][nimationNIMATION]*(?![a-z]))(\s|_)?")
        );
        assert_eq!(prefix_regex("A").as_deref(), Some(r"^([aA](?![a-z]))(\s|_)?"));
        assert_eq!(prefix_regex(""), None);
    }

    #[test]
    fn test_suffix_regex_shape() {
        assert_eq!(
            suffix_regex("mask").as_deref(),
            Some(r"(([A-Z]|\s|_)[maskMASK]{1,})$")
        );
        assert_eq!(suffix_regex(""), None);
    }

    #[test]
    fn test_punctuation_is_escaped() {
        assert_eq!(prefix_regex("Sk_").as_deref(), Some(r"^([sS][k\x{5F}K\x{5F}]*(?![a-z]))(\s|_)?"));
        let pattern = AffixPattern::try_new("a]b-c").unwrap();
        assert!(pattern.has_prefix("a]b-c_thing"));
    }

    #[test]
    fn test_has_prefix() {
        assert!(has_prefix("Anim_ZombieAttack", "animation"));
        assert!(has_prefix("ANIMATION ZombieAttack", "animation"));
        assert!(has_prefix("ATest", "animation"));
        assert!(!has_prefix("ZombieAttack", "animation"));
    }

    #[test]
    fn test_prefix_lookahead_rejects_partial_words() {
        // "Animal" would need to stop before a lowercase letter
        assert!(!has_prefix("Animal", "animation"));
        assert!(!has_prefix("annoying_name", "animation"));
        // backtracks to the last span followed by a non-lowercase character
        let pattern = AffixPattern::new("animation");
        assert_eq!(pattern.prefix_span("AnIMx"), Some(0..3));
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix("SomeTextureNormal", "normal"));
        assert!(has_suffix("some texture normal", "normal"));
        assert!(has_suffix("sometexture_NORMAL", "normal"));
        assert!(!has_suffix("T_SomeTexture", "normal"));
        // no leading marker in front of the word
        assert!(!has_suffix("normal", "normal"));
    }

    #[test]
    fn test_suffix_span_covers_marker() {
        let pattern = AffixPattern::new("diffuse");
        let name = "mremireh_body__diffuse";
        let span = pattern.suffix_span(name).unwrap();
        assert_eq!(&name[span], "_diffuse");
    }

    #[test]
    fn test_empty_token_is_inert() {
        assert!(matches!(
            AffixPattern::try_new(""),
            Err(PatternError::EmptyToken)
        ));
        let pattern = AffixPattern::new("");
        assert!(!pattern.has_prefix("anything"));
        assert!(!pattern.has_suffix("anything"));
        assert_eq!(pattern.token(), "");
    }
}
