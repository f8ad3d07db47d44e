//! Line predicates and string cleaning used by the block parser.

use regex::Regex;
use std::sync::LazyLock;

/// Marks a comment line; also the continuation marker inside a block.
pub const COMMENT_MARKER: char = '*';

/// Phrase that turns a comment line into the start of a documentation block.
pub const BLOCK_START_PHRASE: &str = "lua function";

/// Closes a documentation block.
pub const BLOCK_END: &str = "*/";

// Trailing identifier of a prototype head: `int add` -> `add`, `char *dup` -> `dup`
static RE_TRAILING_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_.:]*)$").unwrap());

/// True when the line carries the comment marker anywhere.
pub fn is_comment(line: &str) -> bool {
    line.contains(COMMENT_MARKER)
}

/// True when the line opens a documentation block.
///
/// Deliberately loose: the marker phrase may appear anywhere on any comment
/// line, not only on the line that opens a `/*` comment.
pub fn is_block_start(line: &str) -> bool {
    is_comment(line) && line.contains(BLOCK_START_PHRASE)
}

/// True when the line closes a documentation block.
pub fn is_block_end(line: &str) -> bool {
    line.contains(BLOCK_END)
}

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Strip an interior block line down to its content.
///
/// Returns the text after the first continuation marker with leading
/// whitespace and one trailing newline removed, or `None` when the line has
/// no marker at all.
pub fn strip_comment_line(line: &str) -> Option<&str> {
    let pos = line.find(COMMENT_MARKER)?;
    let content = line[pos + COMMENT_MARKER.len_utf8()..].trim_start();
    Some(content.strip_suffix('\n').unwrap_or(content))
}

/// Derive a function name from a `@usage` prototype.
///
/// `foo(bar, baz)` → `foo`, `int add(int a, int b)` → `add`. Without a `(`
/// the whole trimmed prototype is the name. Never fails: when the text before
/// `(` does not end in an identifier it is returned trimmed.
pub fn function_name(prototype: &str) -> String {
    let Some(pos) = prototype.find('(') else {
        return prototype.trim().to_string();
    };
    let head = prototype[..pos].trim();
    RE_TRAILING_IDENT
        .captures(head)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| head.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_detection() {
        assert!(is_comment("/**"));
        assert!(is_comment(" * text"));
        assert!(!is_comment("int x = 0;"));
    }

    #[test]
    fn block_start_needs_marker_and_phrase() {
        assert!(is_block_start("/** lua function"));
        assert!(is_block_start("  * lua function helpers"));
        assert!(!is_block_start("// lua function"));
        assert!(!is_block_start("/**"));
    }

    #[test]
    fn block_end() {
        assert!(is_block_end(" */"));
        assert!(is_block_end("*/ int x;"));
        assert!(!is_block_end(" * /"));
    }

    #[test]
    fn blank_text() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn strip_keeps_text_after_first_marker() {
        assert_eq!(strip_comment_line(" * @brief Adds.\n"), Some("@brief Adds."));
        assert_eq!(strip_comment_line("   *    hello"), Some("hello"));
        assert_eq!(strip_comment_line(" * a * b"), Some("a * b"));
        assert_eq!(strip_comment_line(" *"), Some(""));
    }

    #[test]
    fn strip_only_removes_leading_whitespace() {
        assert_eq!(strip_comment_line(" * trailing  "), Some("trailing  "));
    }

    #[test]
    fn strip_without_marker() {
        assert_eq!(strip_comment_line("    plain text"), None);
    }

    #[test]
    fn name_before_paren() {
        assert_eq!(function_name("foo(bar, baz)"), "foo");
        assert_eq!(function_name("  foo  (bar)"), "foo");
    }

    #[test]
    fn name_without_paren() {
        assert_eq!(function_name("foo"), "foo");
        assert_eq!(function_name("  foo \t"), "foo");
    }

    #[test]
    fn name_without_paren_keeps_whole_text() {
        assert_eq!(function_name("  my func  "), "my func");
        assert_eq!(function_name("int counter"), "int counter");
    }

    #[test]
    fn name_drops_c_return_type() {
        assert_eq!(function_name(" int add(int n1, int n2)"), "add");
        assert_eq!(function_name("char *dup(const char *s)"), "dup");
    }

    #[test]
    fn name_keeps_lua_qualifiers() {
        assert_eq!(function_name("string.trim(s)"), "string.trim");
        assert_eq!(function_name("obj:move(dx, dy)"), "obj:move");
    }

    #[test]
    fn name_falls_back_to_trimmed_head() {
        assert_eq!(function_name(" (x)"), "");
        assert_eq!(function_name("42"), "42");
    }

    #[test]
    fn name_is_idempotent() {
        let once = function_name("int add(int n1, int n2)");
        assert_eq!(function_name(&once), once);
    }
}
