use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    /// Opening fence, optional tag, separating whitespace, lazy body, nearest closing fence.
    static ref FENCE: Regex = Regex::new(r"```([A-Za-z0-9_]+)?\s*([\s\S]*?)```").unwrap();
}

/// A fenced block found in a reply. Borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Tag written right after the opening fence, if any.
    pub language: Option<&'a str>,
    pub body: &'a str,
    /// Byte range of the whole block, fences included.
    pub span: Range<usize>,
}

/// Iterate over the well-formed fenced blocks of `text`, left to right.
///
/// A fence with no closing partner is not a block.
pub fn code_blocks(text: &str) -> impl Iterator<Item = CodeBlock<'_>> {
    FENCE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let body = caps.get(2).map_or("", |m| m.as_str());
        Some(CodeBlock {
            language: caps.get(1).map(|m| m.as_str()),
            body,
            span: whole.range(),
        })
    })
}
