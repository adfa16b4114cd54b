//! `PlainSerDe`: codecs for the atomic scalars that flow through path,
//! header, and query parameters. Each scalar has a fallible `encode` and a
//! fallible `decode`; list/set/optional lift element-wise. Encoding is total
//! for every scalar except `double` (NaN/±Infinity have no wire form).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::RpcError;

/// Signed 53-bit integer range mirrored from ECMA-262's safe-integer bound.
const SAFE_LONG_MAX: i64 = (1i64 << 53) - 1;
const SAFE_LONG_MIN: i64 = -SAFE_LONG_MAX;

pub trait PlainCodec: Sized {
    fn encode_plain(&self) -> Result<String, RpcError>;
    fn decode_plain(s: &str) -> Result<Self, RpcError>;
}

impl PlainCodec for String {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(self.clone()) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> { Ok(s.to_owned()) }
}

impl PlainCodec for i32 {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(self.to_string()) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        s.parse()
            .map_err(|_| RpcError::invalid_argument(format!("not a 32-bit integer: {s}")))
    }
}

/// A 53-bit signed integer, the largest value round-trippable through an
/// IEEE-754 double without precision loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SafeLong(i64);

impl SafeLong {
    pub fn new(value: i64) -> Result<Self, RpcError> {
        if !(SAFE_LONG_MIN..=SAFE_LONG_MAX).contains(&value) {
            return Err(RpcError::invalid_argument(format!(
                "safelong out of range [{SAFE_LONG_MIN}, {SAFE_LONG_MAX}]: {value}"
            )));
        }
        Ok(SafeLong(value))
    }

    pub fn value(&self) -> i64 { self.0 }
}

impl PlainCodec for SafeLong {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(self.0.to_string()) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        let value: i64 = s
            .parse()
            .map_err(|_| RpcError::invalid_argument(format!("not an integer: {s}")))?;
        SafeLong::new(value)
    }
}

impl PlainCodec for f64 {
    fn encode_plain(&self) -> Result<String, RpcError> {
        if !self.is_finite() {
            return Err(RpcError::invalid_argument(format!("double must be finite to encode, got {self}")));
        }
        // Rust's default float Display is already the shortest round-trip form.
        Ok(self.to_string())
    }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        s.parse().map_err(|_| RpcError::invalid_argument(format!("not a double: {s}")))
    }
}

impl PlainCodec for bool {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(if *self { "true".to_owned() } else { "false".to_owned() }) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        match s {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(RpcError::invalid_argument(format!("not a boolean: {s}"))),
        }
    }
}

/// ISO-8601 date-time, always serialized normalized to UTC (`Z`); any
/// offset is accepted on decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeValue(pub DateTime<Utc>);

impl PlainCodec for DateTimeValue {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| DateTimeValue(dt.with_timezone(&Utc)))
            .map_err(|e| RpcError::invalid_argument(format!("not a date-time: {s} ({e})")))
    }
}

impl PlainCodec for Uuid {
    fn encode_plain(&self) -> Result<String, RpcError> {
        // `Uuid::to_string` already renders canonical lowercase 8-4-4-4-12 hex.
        Ok(self.to_string())
    }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        Uuid::parse_str(s).map_err(|e| RpcError::invalid_argument(format!("not a uuid: {s} ({e})")))
    }
}

/// An opaque resource identifier. No transformation is performed beyond a
/// validity check that it is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceIdentifier(String);

impl PlainCodec for ResourceIdentifier {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(self.0.clone()) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        if s.is_empty() {
            return Err(RpcError::invalid_argument("rid must not be empty"));
        }
        Ok(ResourceIdentifier(s.to_owned()))
    }
}

/// Binary payload transported as base64 text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binary(pub Vec<u8>);

impl PlainCodec for Binary {
    fn encode_plain(&self) -> Result<String, RpcError> { Ok(BASE64.encode(&self.0)) }

    fn decode_plain(s: &str) -> Result<Self, RpcError> {
        BASE64
            .decode(s)
            .map(Binary)
            .map_err(|e| RpcError::invalid_argument(format!("not valid base64: {e}")))
    }
}

/// Lifts a scalar codec over `Option`: absent means the parameter is
/// omitted entirely from the request, so this is only used on the decode
/// side (encode-side omission is the stub's responsibility).
pub fn encode_optional<T: PlainCodec>(value: &Option<T>) -> Result<Option<String>, RpcError> {
    value.as_ref().map(PlainCodec::encode_plain).transpose()
}

/// Lifts a scalar codec over a list, applied element-wise and preserving
/// order.
pub fn encode_list<T: PlainCodec>(values: &[T]) -> Result<Vec<String>, RpcError> {
    values.iter().map(PlainCodec::encode_plain).collect()
}
