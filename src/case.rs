//! Style assemblers and the public conversion entry points.

use serde_json::Value;

use crate::error::{CaseError, Result};
use crate::models::CaseStyle;
use crate::tokenizer::{self, TokenizerOptions};
use crate::utils::{capitalize, join_lowercase};

/// Converts text using one set of tokenizer options per style.
///
/// `Converter::default()` reproduces the free functions below; a converter built
/// from a config file may carry per-style overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    kebab: TokenizerOptions,
    camel: TokenizerOptions,
    dot: TokenizerOptions,
    snake: TokenizerOptions,
}

impl Default for Converter {
    fn default() -> Self {
        Converter {
            kebab: CaseStyle::Kebab.tokenizer_options(),
            camel: CaseStyle::Camel.tokenizer_options(),
            dot: CaseStyle::Dot.tokenizer_options(),
            snake: CaseStyle::Snake.tokenizer_options(),
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tokenizer options used for one style
    pub fn with_options(mut self, style: CaseStyle, options: TokenizerOptions) -> Self {
        *self.options_mut(style) = options;
        self
    }

    pub fn options(&self, style: CaseStyle) -> &TokenizerOptions {
        match style {
            CaseStyle::Kebab => &self.kebab,
            CaseStyle::Camel => &self.camel,
            CaseStyle::Dot => &self.dot,
            CaseStyle::Snake => &self.snake,
        }
    }

    fn options_mut(&mut self, style: CaseStyle) -> &mut TokenizerOptions {
        match style {
            CaseStyle::Kebab => &mut self.kebab,
            CaseStyle::Camel => &mut self.camel,
            CaseStyle::Dot => &mut self.dot,
            CaseStyle::Snake => &mut self.snake,
        }
    }

    /// Words `input` is split into for `style`
    pub fn tokenize(&self, input: &str, style: CaseStyle) -> Vec<String> {
        tokenizer::tokenize(input, self.options(style))
    }

    /// Convert text to `style`. Never fails.
    pub fn convert(&self, input: &str, style: CaseStyle) -> String {
        let words = self.tokenize(input, style);
        assemble(&words, style)
    }

    /// Convert a decoded value, rejecting anything that is not a string
    pub fn convert_value(&self, value: &Value, style: CaseStyle) -> Result<String> {
        match value {
            Value::String(s) => Ok(self.convert(s, style)),
            other => Err(CaseError::InvalidInputType {
                found: json_kind(other),
            }),
        }
    }
}

/// Join already tokenized words according to `style`
pub fn assemble<S: AsRef<str>>(words: &[S], style: CaseStyle) -> String {
    match style {
        CaseStyle::Kebab => join_lowercase(words, "-"),
        CaseStyle::Dot => join_lowercase(words, "."),
        CaseStyle::Snake => join_lowercase(words, "_"),
        CaseStyle::Camel => {
            let mut result = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    result.push_str(&word.as_ref().to_lowercase());
                } else {
                    result.push_str(&capitalize(word.as_ref()));
                }
            }
            result
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert text to `style` with the default tokenizer options
pub fn convert(input: &str, style: CaseStyle) -> String {
    Converter::default().convert(input, style)
}

/// Convert a decoded value to `style`, failing with
/// [`CaseError::InvalidInputType`] for anything that is not a string
pub fn convert_value(value: &Value, style: CaseStyle) -> Result<String> {
    Converter::default().convert_value(value, style)
}

/// `XMLHttpRequest` -> `xml-http-request`
pub fn to_kebab_case(input: &str) -> String {
    convert(input, CaseStyle::Kebab)
}

/// `foo--bar__baz` -> `fooBarBaz`. An existing camelCase run is treated as
/// one word: `fooBar` -> `foobar`.
pub fn to_camel_case(input: &str) -> String {
    convert(input, CaseStyle::Camel)
}

/// `HELLO_WORLD` -> `hello.world`
pub fn to_dot_case(input: &str) -> String {
    convert(input, CaseStyle::Dot)
}

/// `XMLHttpRequest` -> `xml_http_request`
pub fn to_snake_case(input: &str) -> String {
    convert(input, CaseStyle::Snake)
}
