use crate::constants::format::PLAIN_TEXT;
use crate::error::ParleyError;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Turns source code into highlighted markup.
pub trait HighlightEngine: Send + Sync {
    /// Whether `language` is a tag this engine can highlight.
    fn supports(&self, language: &str) -> bool;

    /// Highlight `code` as `language`. The result is embedded verbatim, so it
    /// must already be HTML-escaped.
    fn highlight(&self, code: &str, language: &str) -> Result<String, ParleyError>;
}

/// [`HighlightEngine`] backed by syntect's bundled grammars, emitting
/// class-annotated spans for a stylesheet to color.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self::with_syntax_set(SyntaxSet::load_defaults_newlines())
    }

    pub fn with_syntax_set(syntax_set: SyntaxSet) -> Self {
        Self { syntax_set }
    }

    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        if language == PLAIN_TEXT {
            return self.syntax_set.find_syntax_plain_text();
        }
        self.syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine for SyntectHighlighter {
    fn supports(&self, language: &str) -> bool {
        language == PLAIN_TEXT || self.syntax_set.find_syntax_by_token(language).is_some()
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, ParleyError> {
        let syntax = self.syntax_for(language);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| ParleyError::highlight(language, e.to_string()))?;
        }

        Ok(generator.finalize())
    }
}
