use core::{fmt, marker::PhantomData, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{NodeId, Uuid};

/// Serializes as the canonical 8-4-4-4-12 string.
impl Serialize for Uuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::<Self>::new(
            "a 36-character 8-4-4-4-12 hex UUID",
        ))
    }
}

/// Serializes as 12 lowercase hexadecimal digits.
impl Serialize for NodeId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::<Self>::new("12 hexadecimal digits"))
    }
}

struct TextVisitor<T> {
    expecting: &'static str,
    _marker: PhantomData<T>,
}

impl<T> TextVisitor<T> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _marker: PhantomData,
        }
    }
}

impl<T> de::Visitor<'_> for TextVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(de::Error::custom)
    }
}

/// Serializes a [`Uuid`] as its raw `u128` value instead of a string.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use timeuuid::{Uuid, as_native_uuid};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_native_uuid")]
///     id: Uuid,
/// }
/// ```
pub mod as_native_uuid {
    use super::*;

    pub fn serialize<S>(uuid: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        uuid.to_u128().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(d).map(Uuid::from_u128)
    }
}
