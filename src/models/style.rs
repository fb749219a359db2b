use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tokenizer::{TokenizerOptions, DEFAULT_SEPARATORS};

/// Target case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// lowercase words joined with `-`
    #[default]
    #[value(alias = "kebab-case")]
    #[serde(alias = "kebab-case")]
    Kebab,
    /// first word lowercase, later words capitalized, no separator
    #[value(alias = "camelCase")]
    #[serde(alias = "camelCase")]
    Camel,
    /// lowercase words joined with `.`
    #[value(alias = "dot.case")]
    #[serde(alias = "dot.case")]
    Dot,
    /// lowercase words joined with `_`
    #[value(alias = "snake_case")]
    #[serde(alias = "snake_case")]
    Snake,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 4] = [
        CaseStyle::Kebab,
        CaseStyle::Camel,
        CaseStyle::Dot,
        CaseStyle::Snake,
    ];

    /// Conventional name of the style, written in the style itself
    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Camel => "camelCase",
            CaseStyle::Dot => "dot.case",
            CaseStyle::Snake => "snake_case",
        }
    }

    /// Tokenizer settings the style uses unless configured otherwise.
    ///
    /// kebab and snake split camelCase boundaries but keep `item123` whole;
    /// camel and dot leave an existing camelCase run as a single word and
    /// split letters from numbers instead.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        let splits_case = matches!(self, CaseStyle::Kebab | CaseStyle::Snake);
        TokenizerOptions {
            separators: DEFAULT_SEPARATORS.to_string(),
            split_case_transitions: splits_case,
            split_letter_digit: !splits_case,
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
