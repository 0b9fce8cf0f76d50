//! Full-string pattern matching.
//!
//! Patterns use the `regex` crate's syntax and always match the whole
//! input: `[a-z]+` matches `"abc"` but not `"abc1"`. There is no partial or
//! search mode.

use regex::{Regex, RegexBuilder};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};

use crate::error::{Error, Result};
use crate::log::{LogLevel, emit_log};

/// Compile options for a [`Pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternOptions {
    /// Match letters without regard to case.
    pub case_insensitive: bool,
    /// `^`/`$` also match at line boundaries inside the pattern.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Unicode-aware classes such as `\w` and `\d`.
    pub unicode: bool,
    /// Upper bound on compiled program size, in bytes.
    pub size_limit: Option<usize>,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl PatternOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    #[must_use]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    #[must_use]
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    #[must_use]
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    #[must_use]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
    }

    fn parser(&self) -> regex_syntax::Parser {
        ParserBuilder::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode)
            .build()
    }

    /// `pattern` wrapped in start/end-of-text anchors.
    ///
    /// Anchors are added to the parsed expression, not spliced into the
    /// source, so a trailing `(?x)` comment cannot swallow them. The printed
    /// form already carries the flags.
    fn anchored(&self, pattern: &str) -> String {
        match self.parser().parse(pattern) {
            Ok(hir) => {
                Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]).to_string()
            }
            Err(_) => format!(r"\A(?:{pattern})\z"),
        }
    }
}

/// A compiled full-match pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern` with default options.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_options(pattern, PatternOptions::default())
    }

    /// Compile `pattern` with explicit options.
    pub fn with_options(pattern: &str, options: PatternOptions) -> Result<Self> {
        // The bare build reports syntax errors against the caller's text.
        let compiled = options
            .builder(pattern)
            .build()
            .and_then(|_| options.builder(&options.anchored(pattern)).build());

        match compiled {
            Ok(regex) => Ok(Self {
                source: pattern.to_owned(),
                regex,
            }),
            Err(source) => {
                emit_log(
                    LogLevel::Debug,
                    &format!("pattern {pattern:?} failed to compile: {source}"),
                );
                Err(Error::Pattern {
                    pattern: pattern.to_owned(),
                    source,
                })
            }
        }
    }

    /// Check whether the entire `text` matches.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as written by the caller, without anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Check whether the entire `text` matches `pattern`.
///
/// Compiles the pattern on every call; build a [`Pattern`] once when
/// matching many inputs.
///
/// ```
/// use strext_rust::matches;
///
/// assert!(matches("abc123", "[a-z]+[0-9]+").unwrap());
/// assert!(!matches("abc", "[0-9]+").unwrap());
/// assert!(matches("abc", "(").is_err());
/// ```
pub fn matches(text: &str, pattern: &str) -> Result<bool> {
    Pattern::new(pattern).map(|p| p.is_full_match(text))
}
