//! Case conversion between kebab-case, camelCase, dot.case and snake_case.
//!
//! ```
//! use recase::{to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
//! assert_eq!(to_camel_case("foo--bar__baz"), "fooBarBaz");
//! assert_eq!(to_dot_case("HELLO_WORLD"), "hello.world");
//! ```

pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod tokenizer;
pub mod utils;

pub use case::{
    convert, convert_value, to_camel_case, to_dot_case, to_kebab_case, to_snake_case, Converter,
};
pub use error::CaseError;
pub use models::CaseStyle;
pub use tokenizer::{tokenize, TokenizerOptions};
