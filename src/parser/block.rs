//! Documentation block parser: a line-by-line state machine.
//!
//! A block opens on a comment line mentioning `lua function` and closes on
//! the first line containing `*/`. Every line in between must carry the `*`
//! continuation marker; its content is either one of the four tags or a
//! description line.

use super::ParseError;
use crate::model::{Document, FunctionDoc};
use crate::text;
use regex::Regex;
use std::sync::LazyLock;

// First whitespace-delimited token of an unknown tag line
static RE_TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@\S*").unwrap());

/// Tags recognized inside a block, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Brief,
    Param,
    Returns,
    Usage,
}

impl Tag {
    const ALL: [Tag; 4] = [Tag::Brief, Tag::Param, Tag::Returns, Tag::Usage];

    pub fn keyword(self) -> &'static str {
        match self {
            Tag::Brief => "@brief",
            Tag::Param => "@param",
            Tag::Returns => "@returns",
            Tag::Usage => "@usage",
        }
    }

    /// Split `content` into the first matching tag and its raw remainder.
    ///
    /// Plain prefix match: `@paramfoo` is `@param` with remainder `foo`.
    pub fn split(content: &str) -> Option<(Tag, &str)> {
        Tag::ALL
            .into_iter()
            .find_map(|tag| content.strip_prefix(tag.keyword()).map(|rest| (tag, rest)))
    }
}

enum State {
    Outside,
    Inside(FunctionDoc),
}

/// Streaming block parser. Feed lines in order, then call [`finish`](Self::finish).
pub struct BlockParser {
    state: State,
    functions: Vec<FunctionDoc>,
    line_no: usize,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser {
    pub fn new() -> Self {
        Self {
            state: State::Outside,
            functions: Vec::new(),
            line_no: 0,
        }
    }

    /// Process one source line.
    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_no += 1;
        let line_no = self.line_no;

        match &mut self.state {
            State::Outside => {
                if text::is_block_start(line) {
                    tracing::trace!(line = line_no, "block opened");
                    self.state = State::Inside(FunctionDoc::new());
                }
            }
            State::Inside(_) if text::is_block_end(line) => {
                if let State::Inside(doc) = std::mem::replace(&mut self.state, State::Outside) {
                    tracing::debug!(line = line_no, name = ?doc.name, "block closed");
                    self.functions.push(doc);
                }
            }
            State::Inside(doc) => {
                let content =
                    text::strip_comment_line(line).ok_or_else(|| ParseError::MissingContinuation {
                        line: line_no,
                        text: line.trim_end().to_string(),
                    })?;
                classify(doc, content, line_no)?;
            }
        }
        Ok(())
    }

    /// End of input. An unterminated trailing block is dropped.
    pub fn finish(self) -> Document {
        if let State::Inside(doc) = self.state {
            tracing::debug!(
                name = ?doc.name,
                "input ended inside a block; dropping unterminated record"
            );
        }
        Document {
            functions: self.functions,
        }
    }
}

/// Parse a whole source text into a Document.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let mut parser = BlockParser::new();
    for line in input.lines() {
        parser.feed(line)?;
    }
    Ok(parser.finish())
}

/// Apply one stripped interior line to the record being built.
fn classify(doc: &mut FunctionDoc, content: &str, line_no: usize) -> Result<(), ParseError> {
    match Tag::split(content) {
        Some((Tag::Brief, rest)) => doc.brief = Some(rest.to_string()),
        Some((Tag::Param, rest)) => doc.params.push(rest.to_string()),
        Some((Tag::Returns, rest)) => doc.returns = Some(rest.to_string()),
        Some((Tag::Usage, rest)) => doc.set_prototype(rest),
        None if content.starts_with('@') => {
            let tag = RE_TAG_TOKEN
                .find(content)
                .map_or(content, |m| m.as_str())
                .to_string();
            return Err(ParseError::UnknownTag { line: line_no, tag });
        }
        None if text::is_blank(content) => {}
        None => doc.push_description(content),
    }
    Ok(())
}
