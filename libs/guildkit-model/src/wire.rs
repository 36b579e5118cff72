//! Field encodings shared by entities and update payloads.
//!
//! [`ToWire`] is the per-semantic-type encoding used when building sparse
//! update bodies. It is infallible: every value the model can hold has exactly
//! one JSON rendition.
//!
//! Enums that travel as lower-case strings or small integers are declared with
//! `wire_tokens!` / `wire_codes!`, which derive both directions of the mapping
//! from one table.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::FormatError;

/// Encoding of a field value into its wire representation.
pub trait ToWire {
    fn to_wire(&self) -> Value;
}

macro_rules! to_wire_via_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToWire for $t {
                fn to_wire(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

to_wire_via_from!(bool, u8, u16, u32, u64, i32, i64);

impl ToWire for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToWire::to_wire)
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(ToWire::to_wire).collect())
    }
}

/// Visitor accepting an unsigned integer either as a JSON number or as a
/// numeric string.
pub(crate) struct LenientU64 {
    pub(crate) what: &'static str,
}

impl Visitor<'_> for LenientU64 {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} as an unsigned integer or numeric string", self.what)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        v.parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// Platform identifier. Sent as a numeric string, accepted as either a
/// numeric string or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self)
            .map_err(|_| FormatError::new("snowflake", s))
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(LenientU64 { what: "snowflake" })
            .map(Self)
    }
}

impl ToWire for Snowflake {
    fn to_wire(&self) -> Value {
        Value::String(self.to_string())
    }
}

/// RFC 3339 timestamp as sent by the platform (e.g. `joined_at`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl Timestamp {
    #[must_use]
    pub const fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    #[must_use]
    pub const fn get(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

/// Declares an enum transmitted as a lower-case string token.
///
/// The table is the only place a token is spelled. Decoding is
/// case-insensitive and also accepts the variant name itself.
macro_rules! wire_tokens {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Wire token table, in declaration order.
            pub const TOKENS: &'static [(&'static str, $name)] = &[
                $( ($token, $name::$variant), )+
            ];

            #[must_use]
            pub const fn as_token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }

            /// Decodes a wire token.
            ///
            /// # Errors
            /// Returns [`FormatError`](crate::error::FormatError) when `raw`
            /// matches neither a token nor a variant name.
            pub fn parse_token(raw: &str) -> Result<Self, $crate::error::FormatError> {
                $(
                    if raw.eq_ignore_ascii_case($token)
                        || raw.eq_ignore_ascii_case(stringify!($variant))
                    {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::error::FormatError::new($kind, raw))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_token())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_token(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_token())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_token(&raw).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::wire::ToWire for $name {
            fn to_wire(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_token().to_owned())
            }
        }
    };
}

/// Declares an enum transmitted as a small integer code.
macro_rules! wire_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Wire code table, in declaration order.
            pub const CODES: &'static [(u8, $name)] = &[
                $( ($code, $name::$variant), )+
            ];

            #[must_use]
            pub const fn code(self) -> u8 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Decodes a wire code.
            ///
            /// # Errors
            /// Returns [`FormatError`](crate::error::FormatError) for unknown codes.
            pub fn from_code(code: u64) -> Result<Self, $crate::error::FormatError> {
                Self::CODES
                    .iter()
                    .find(|(known, _)| u64::from(*known) == code)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| $crate::error::FormatError::new($kind, code.to_string()))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <u64 as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_code(code).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::wire::ToWire for $name {
            fn to_wire(&self) -> ::serde_json::Value {
                ::serde_json::Value::from(self.code())
            }
        }
    };
}

pub(crate) use wire_codes;
pub(crate) use wire_tokens;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snowflake_serializes_as_numeric_string() {
        let id = Snowflake::new(175_928_847_299_117_063);
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            json!("175928847299117063")
        );
        assert_eq!(id.to_wire(), json!("175928847299117063"));
    }

    #[test]
    fn snowflake_decodes_from_string_or_number() {
        let from_str: Snowflake = serde_json::from_value(json!("42")).unwrap();
        let from_num: Snowflake = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(from_str, Snowflake::new(42));
        assert_eq!(from_num, Snowflake::new(42));
    }

    #[test]
    fn snowflake_rejects_garbage() {
        assert!(serde_json::from_value::<Snowflake>(json!("abc")).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(-1)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(true)).is_err());

        let err = "12x".parse::<Snowflake>().unwrap_err();
        assert_eq!(err.kind, "snowflake");
    }

    #[test]
    fn lists_and_options_encode_elementwise() {
        let ids = vec![Snowflake::new(1), Snowflake::new(2)];
        assert_eq!(ids.to_wire(), json!(["1", "2"]));

        let none: Option<Snowflake> = None;
        assert_eq!(none.to_wire(), json!(null));
        assert_eq!(Some(7u32).to_wire(), json!(7));
    }

    #[test]
    fn timestamp_round_trips_rfc3339() {
        let raw = json!("2019-03-01T18:21:02.617000+00:00");
        let ts: Timestamp = serde_json::from_value(raw).unwrap();
        assert_eq!(ts.get().year(), 2019);

        let back = serde_json::to_value(ts).unwrap();
        let again: Timestamp = serde_json::from_value(back).unwrap();
        assert_eq!(again, ts);
    }
}
