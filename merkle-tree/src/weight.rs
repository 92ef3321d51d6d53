use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt::{Display, Formatter};

/// Largest integer a JSON float can carry without precision loss (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Ledger weight as written in the ledger config, not yet validated.
///
/// Configs produced by different tools carry shares as JSON numbers,
/// decimal strings or `0x` hex strings, all of them are accepted.
/// An integral float such as `10.0` is read as the integer `10`, so it is written back as `10`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawWeight(pub Value);

impl<'de> Deserialize<'de> for RawWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawWeight::normalized)
    }
}

impl RawWeight {
    /// Rewrites a float carrying a safe integer as that integer, anything else is kept as written.
    pub fn normalized(value: Value) -> Self {
        let integral = match &value {
            Value::Number(number) if number.is_f64() => number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= 0.0 && *f <= MAX_SAFE_INTEGER as f64),
            _ => None,
        };
        match integral {
            Some(f) => RawWeight(Value::from(f as u64)),
            None => RawWeight(value),
        }
    }

    /// Converts the raw value into an unsigned 256-bit weight,
    /// on failure returns the reason the value was rejected.
    pub fn to_u256(&self) -> Result<U256, &'static str> {
        match &self.0 {
            Value::Number(number) => number_to_u256(number),
            Value::String(text) => string_to_u256(text),
            _ => Err("weight has to be a number or a numeric string"),
        }
    }
}

fn number_to_u256(number: &Number) -> Result<U256, &'static str> {
    if let Some(value) = number.as_u64() {
        return Ok(U256::from(value));
    }
    if number.is_i64() {
        return Err("weight cannot be negative");
    }
    let value = number
        .as_f64()
        .ok_or("weight is not representable as a number")?;
    if !value.is_finite() {
        Err("weight has to be finite")
    } else if value < 0.0 {
        Err("weight cannot be negative")
    } else if value.fract() != 0.0 {
        Err("weight has to be an integer")
    } else if value > MAX_SAFE_INTEGER as f64 {
        Err("numeric weight exceeds the safe integer range, use a decimal string")
    } else {
        Ok(U256::from(value as u64))
    }
}

fn string_to_u256(text: &str) -> Result<U256, &'static str> {
    if text.starts_with('-') {
        return Err("weight cannot be negative");
    }
    let (digits, radix) = match text.strip_prefix("0x") {
        Some(hex_digits) => (hex_digits, 16),
        None => (text, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix as u32)) {
        return Err("weight string is not an unsigned integer");
    }
    U256::from_str_radix(digits, radix).map_err(|_| "weight does not fit into uint256")
}

impl Display for RawWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RawWeight {
    fn from(value: u64) -> Self {
        RawWeight(Value::from(value))
    }
}

impl From<&str> for RawWeight {
    fn from(value: &str) -> Self {
        RawWeight(Value::from(value))
    }
}

impl From<U256> for RawWeight {
    fn from(value: U256) -> Self {
        RawWeight(Value::String(value.to_string()))
    }
}
