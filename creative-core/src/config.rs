use serde::{Deserialize, Serialize};
use crate::format::{Locale, NumberFormat, SuffixStyle};

/// How numbers and money are displayed. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub locale: Locale,
    /// ISO 4217 code used for every money value
    pub currency: String,
    pub suffix_style: SuffixStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr,
            currency: "BRL".to_string(),
            suffix_style: SuffixStyle::Short,
        }
    }
}

impl DisplayConfig {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.locale, self.suffix_style, self.currency.clone())
    }

    /// Read the optional `config` object of a demo/creatives document.
    pub fn from_document(json: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| format!("config parse: {e}"))?;
        match value.get("config") {
            Some(cfg) => serde_json::from_value(cfg.clone())
                .map_err(|e| format!("config parse: {e}")),
            None => Ok(Self::default()),
        }
    }

    /// Overlay explicitly given values; `None` keeps the current one.
    pub fn with_overrides(
        mut self,
        locale: Option<&str>,
        currency: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self, String> {
        if let Some(l) = locale {
            self.locale = l.parse()?;
        }
        if let Some(c) = currency {
            let code = c.trim().to_ascii_uppercase();
            if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(format!("Invalid currency code: {c}"));
            }
            self.currency = code;
        }
        if let Some(s) = suffix {
            self.suffix_style = s.parse()?;
        }
        Ok(self)
    }
}
