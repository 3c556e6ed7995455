//! Post-processing of assistant replies.
//!
//! [`ResponseFormatter`] finds fenced code blocks in a reply and swaps each
//! one for a `<pre><code>` fragment highlighted by a [`HighlightEngine`].
//! Everything outside the fences is left exactly as the model wrote it.

mod blocks;
mod formatter;
mod highlight;

pub use blocks::{code_blocks, CodeBlock};
pub use formatter::ResponseFormatter;
pub use highlight::{HighlightEngine, SyntectHighlighter};
