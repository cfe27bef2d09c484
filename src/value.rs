//! Setting values and the kinds of settings a component can declare

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete value for one setting of a component instance
///
/// Values arrive from catalog files (TOML) and from saved documents (JSON).
/// `Null` only ever comes from JSON and renders as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    /// Convert an arbitrary JSON value into a setting value
    ///
    /// Arrays and objects have no setting kind of their own; they are kept as
    /// their compact JSON text.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => SettingValue::Null,
            Value::Bool(b) => SettingValue::Boolean(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => SettingValue::Number(f),
                None => SettingValue::Text(n.to_string()),
            },
            Value::String(s) => SettingValue::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => SettingValue::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

impl From<f64> for SettingValue {
    fn from(n: f64) -> Self {
        SettingValue::Number(n)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Boolean(b)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Null => Ok(()),
            SettingValue::Boolean(b) => write!(f, "{}", b),
            SettingValue::Number(n) => f.write_str(&format_number(*n)),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

/// Format a number the way it reads in browser-produced HTML
///
/// Integral and decimal values print plainly; magnitudes from `1e21` up or
/// below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 prints as "0"
    if n == 0.0 {
        return "0".to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }

    // shortest round-trip digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = digits.len() as i32;
    // position of the decimal point relative to the digit string
    let point = exponent + 1;

    if count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

/// The kind of value a setting holds
///
/// Only free text is treated as untrusted; every other kind is inserted into
/// templates verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Text,
    Color,
    Number,
    Url,
    Boolean,
    #[serde(alias = "choice")]
    Select,
    Image,
}

impl SettingKind {
    /// Whether values of this kind must be HTML-escaped before substitution
    pub fn escapes(self) -> bool {
        matches!(self, SettingKind::Text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKind::Text => "text",
            SettingKind::Color => "color",
            SettingKind::Number => "number",
            SettingKind::Url => "url",
            SettingKind::Boolean => "boolean",
            SettingKind::Select => "select",
            SettingKind::Image => "image",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
