//! Text case converters
//!
//! Each converter trims its input, splits it on runs of whitespace and joins
//! the resulting tokens in its own style. Input with no tokens converts to an
//! empty string.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Supported output styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Kebab,
    Camel,
    Dot,
}

impl CaseStyle {
    pub fn apply(self, input: &str) -> String {
        match self {
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Dot => to_dot_case(input),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Dot => "dot",
        };
        f.write_str(name)
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kebab" => Ok(CaseStyle::Kebab),
            "camel" => Ok(CaseStyle::Camel),
            "dot" => Ok(CaseStyle::Dot),
            other => Err(Error::invalid_input(format!(
                "unsupported case style: {}",
                other
            ))),
        }
    }
}

/// `"Hello  World"` -> `"hello-world"`
pub fn to_kebab_case(input: &str) -> String {
    lowercase_tokens(input).join("-")
}

/// `"Hello world example"` -> `"helloWorldExample"`
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Same tokenization as `lowercase_tokens`: U+FEFF is not a separator.
    for (idx, word) in input.split_whitespace().enumerate() {
        if idx == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

/// `"Hello world example"` -> `"hello.world.example"`
pub fn to_dot_case(input: &str) -> String {
    lowercase_tokens(input).join(".")
}

/// Convert an untyped value.
///
/// Only JSON strings are text. Every other value, `null` included, is
/// rejected with [`Error::InvalidInput`].
pub fn convert_value(style: CaseStyle, input: &Value) -> Result<String> {
    match input {
        Value::String(text) => Ok(style.apply(text)),
        Value::Null => Err(Error::invalid_input(
            "input must be a non-null string, got null",
        )),
        other => Err(Error::invalid_input(format!(
            "input must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

// `split_whitespace` already drops the empty tokens a trim would leave behind.
// It splits on Unicode White_Space, which excludes U+FEFF (BOM); a BOM stays
// part of its token.
fn lowercase_tokens(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
