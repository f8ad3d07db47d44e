//! Data model for parsed documentation, independent of any output format.

use crate::text;

/// Ordered documentation records from a single source file.
#[derive(Debug, Default)]
pub struct Document {
    pub functions: Vec<FunctionDoc>,
}

/// A single documented function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionDoc {
    /// @brief (raw remainder, last occurrence wins)
    pub brief: Option<String>,
    /// Untagged lines, space-joined
    pub description: Option<String>,
    /// @returns (raw remainder, last occurrence wins)
    pub returns: Option<String>,
    /// @usage (raw remainder)
    pub prototype: Option<String>,
    /// Derived from the prototype
    pub name: Option<String>,
    /// @param entries in encounter order
    pub params: Vec<String>,
}

impl FunctionDoc {
    /// An empty record: every field unset, no params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the `@usage` prototype and derive the function name from it.
    pub fn set_prototype(&mut self, prototype: &str) {
        self.name = Some(text::function_name(prototype));
        self.prototype = Some(prototype.to_string());
    }

    /// Append a description line, separated from earlier text by one space.
    pub fn push_description(&mut self, line: &str) {
        match self.description {
            Some(ref mut desc) => {
                desc.push(' ');
                desc.push_str(line);
            }
            None => self.description = Some(line.to_string()),
        }
    }
}
