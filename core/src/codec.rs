//! JSON encoding and decoding for request and response bodies.
//!
//! # Design
//! Request bodies are decoded from the first JSON value in the byte stream;
//! anything after a complete value is ignored, and no `Content-Type` is
//! required. The root must be an object, so arrays and scalars are rejected
//! even when they would otherwise map onto a struct.
//!
//! Timestamps use RFC 3339 in UTC with nanosecond precision.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::types::{CreateTodo, UpdateTodo};

/// Decode the body of a collection POST.
pub fn decode_create(body: &[u8]) -> Result<CreateTodo, Error> {
    decode_object(body)
}

/// Decode the body of an item PUT.
pub fn decode_update(body: &[u8]) -> Result<UpdateTodo, Error> {
    decode_object(body)
}

fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(Error::InvalidJson)?
        .map_err(|_| Error::InvalidJson)?;

    if !value.is_object() {
        return Err(Error::InvalidJson);
    }
    serde_json::from_value(value).map_err(|_| Error::InvalidJson)
}

/// Encode a response payload, newline-terminated.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = serde_json::to_vec(value)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Serde adapter for `DateTime<Utc>` fields.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
