use crate::constants::format::PLAIN_TEXT;
use crate::error::ParleyError;
use crate::format::{code_blocks, HighlightEngine};

/// Replaces every fenced code block in a reply with highlighted markup.
///
/// Holds no state besides its engine, so one instance can serve any number
/// of sessions.
pub struct ResponseFormatter<H> {
    engine: H,
}

impl<H: HighlightEngine> ResponseFormatter<H> {
    pub fn new(engine: H) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &H {
        &self.engine
    }

    /// The tag a block is actually highlighted with.
    pub fn effective_language<'a>(&self, language: Option<&'a str>) -> &'a str {
        match language {
            Some(tag) if self.engine.supports(tag) => tag,
            Some(tag) => {
                tracing::debug!(language = tag, "unsupported language, highlighting as plain text");
                PLAIN_TEXT
            }
            None => PLAIN_TEXT,
        }
    }

    /// Format a raw reply.
    ///
    /// Text outside fences is copied unchanged. The first highlight failure
    /// aborts the whole call.
    pub fn format(&self, response: &str) -> Result<String, ParleyError> {
        let mut output = String::with_capacity(response.len());
        let mut cursor = 0;

        for block in code_blocks(response) {
            let language = self.effective_language(block.language);
            let highlighted = self.engine.highlight(block.body, language)?;

            output.push_str(&response[cursor..block.span.start]);
            output.push_str(&wrap_block(language, &highlighted));
            cursor = block.span.end;
        }

        output.push_str(&response[cursor..]);
        Ok(output)
    }
}

fn wrap_block(language: &str, highlighted: &str) -> String {
    format!("<pre><code class=\"{language}\">{highlighted}</code></pre>")
}
