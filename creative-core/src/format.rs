use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Suffixes used when abbreviating large counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixStyle {
    /// "1.5K", "2.0M"
    #[default]
    Short,
    /// "1.5mil", "2.0mi"
    Long,
}

impl SuffixStyle {
    fn thousand(self) -> &'static str {
        match self {
            Self::Short => "K",
            Self::Long => "mil",
        }
    }

    fn million(self) -> &'static str {
        match self {
            Self::Short => "M",
            Self::Long => "mi",
        }
    }
}

impl FromStr for SuffixStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "k" => Ok(Self::Short),
            "long" | "mil" => Ok(Self::Long),
            other => Err(format!("Unknown suffix style: {other} (expected short or long)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    pub fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::PtBr => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::PtBr => ',',
        }
    }

    /// Whether a space separates the currency symbol from the amount.
    fn spaced_currency(self) -> bool {
        matches!(self, Self::PtBr)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().replace('_', "-").to_ascii_lowercase();
        match norm.as_str() {
            "en" | "en-us" => Ok(Self::EnUs),
            "pt" | "pt-br" => Ok(Self::PtBr),
            other => Err(format!("Unsupported locale: {other}")),
        }
    }
}

/// Symbol for an ISO 4217 code; unknown codes render as the code itself.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => code,
    }
}

/// Insert `sep` between groups of three digits.
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Locale- and suffix-aware number formatting shared by the modal, the
/// retention chart and the report CLI.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberFormat {
    pub locale: Locale,
    pub suffix_style: SuffixStyle,
    pub currency: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            suffix_style: SuffixStyle::default(),
            currency: "BRL".to_string(),
        }
    }
}

impl NumberFormat {
    pub fn new(locale: Locale, suffix_style: SuffixStyle, currency: impl Into<String>) -> Self {
        Self { locale, suffix_style, currency: currency.into() }
    }

    /// Abbreviated count: millions and thousands get one decimal and a
    /// suffix, smaller values are rounded and grouped.
    pub fn format_number(&self, value: f64) -> String {
        let v = finite_or_zero(value);
        let style = self.suffix_style;
        if v >= 1_000_000.0 {
            return format!("{:.1}{}", v / 1_000_000.0, style.million());
        }
        // 999.5 would otherwise round to "1,000"
        if v.round() >= 1_000.0 {
            let k = format!("{:.1}", v / 1_000.0);
            // 999_950 would otherwise read "1000.0K"
            if k == "1000.0" {
                return format!("1.0{}", style.million());
            }
            return format!("{k}{}", style.thousand());
        }
        self.format_decimal(v, 0)
    }

    pub fn format_count(&self, value: u64) -> String {
        self.format_number(value as f64)
    }

    /// Full integer with digit grouping, e.g. "1,234,567".
    pub fn format_grouped(&self, value: u64) -> String {
        group_digits(&value.to_string(), self.locale.group_separator())
    }

    pub fn format_decimal(&self, value: f64, places: usize) -> String {
        let v = finite_or_zero(value);
        let fixed = format!("{:.*}", places, v.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        let mut out = String::new();
        // no "-0"
        if v < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.locale.group_separator()));
        if let Some(frac) = frac_part {
            out.push(self.locale.decimal_separator());
            out.push_str(frac);
        }
        out
    }

    pub fn format_percent(&self, value: f64, places: usize) -> String {
        format!("{}%", self.format_decimal(value, places))
    }

    pub fn format_currency(&self, value: f64) -> String {
        let v = finite_or_zero(value);
        let amount = self.format_decimal(v.abs(), 2);
        let negative = v < 0.0 && amount.bytes().any(|b| (b'1'..=b'9').contains(&b));
        let symbol = currency_symbol(&self.currency);
        let spaced = self.locale.spaced_currency() || symbol == self.currency;
        format!(
            "{}{}{}{}",
            if negative { "-" } else { "" },
            symbol,
            if spaced { " " } else { "" },
            amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberFormat {
        NumberFormat::new(Locale::EnUs, SuffixStyle::Short, "USD")
    }

    fn br() -> NumberFormat {
        NumberFormat::new(Locale::PtBr, SuffixStyle::Long, "BRL")
    }

    #[test]
    fn test_format_number_thresholds() {
        let f = en();
        assert_eq!(f.format_number(999.0), "999");
        assert_eq!(f.format_number(1500.0), "1.5K");
        assert_eq!(f.format_number(2_000_000.0), "2.0M");
        assert_eq!(f.format_number(0.0), "0");
        assert_eq!(f.format_number(1000.0), "1.0K");
        assert_eq!(f.format_number(999_999_999.0), "1000.0M");
    }

    #[test]
    fn test_format_number_long_suffixes() {
        let f = br();
        assert_eq!(f.format_number(1500.0), "1.5mil");
        assert_eq!(f.format_number(2_000_000.0), "2.0mi");
        assert_eq!(f.format_number(42.0), "42");
    }

    #[test]
    fn test_thousand_rounding_promotes_to_million() {
        assert_eq!(en().format_number(999_960.0), "1.0M");
        assert_eq!(en().format_number(999_940.0), "999.9K");
    }

    #[test]
    fn test_hundreds_rounding_promotes_to_thousand() {
        assert_eq!(en().format_number(999.5), "1.0K");
        assert_eq!(br().format_number(999.7), "1.0mil");
        assert_eq!(en().format_number(999.4), "999");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(en().format_number(f64::NAN), "0");
        assert_eq!(en().format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_grouping_per_locale() {
        assert_eq!(en().format_grouped(1_234_567), "1,234,567");
        assert_eq!(br().format_grouped(1_234_567), "1.234.567");
        assert_eq!(en().format_grouped(999), "999");
        assert_eq!(en().format_grouped(1000), "1,000");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(en().format_decimal(1234.567, 2), "1,234.57");
        assert_eq!(br().format_decimal(1234.567, 2), "1.234,57");
        assert_eq!(en().format_decimal(-0.001, 2), "0.00");
        assert_eq!(en().format_decimal(-12.5, 1), "-12.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(en().format_percent(3.14159, 2), "3.14%");
        assert_eq!(br().format_percent(50.0, 1), "50,0%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(en().format_currency(1234.5), "$1,234.50");
        assert_eq!(br().format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(en().format_currency(-3.0), "-$3.00");
        let odd = NumberFormat::new(Locale::EnUs, SuffixStyle::Short, "CHF");
        assert_eq!(odd.format_currency(7.0), "CHF 7.00");
    }

    #[test]
    fn test_parse_locale_and_suffix() {
        assert_eq!("pt_BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
        assert_eq!("Long".parse::<SuffixStyle>().unwrap(), SuffixStyle::Long);
        assert!("tiny".parse::<SuffixStyle>().is_err());
    }
}
