use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A field value that distinguishes "not present" from an explicit `null`.
///
/// `Option` conflates the two, which is unsafe for PUT bodies where an
/// explicit `null` clears a server-side value while an absent field leaves
/// it untouched. Fields of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Maybe::is_absent")]` so that a
/// missing field decodes to [`Maybe::Absent`] and absent values are never
/// written back.
///
/// ```rust
/// use c8y_model::Maybe;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Fragment {
///     #[serde(default)]
///     text: Maybe<String>,
/// }
///
/// let present: Fragment = serde_json::from_str(r#"{"text": "tick"}"#).unwrap();
/// let null: Fragment = serde_json::from_str(r#"{"text": null}"#).unwrap();
/// let missing: Fragment = serde_json::from_str("{}").unwrap();
///
/// assert_eq!(present.text, Maybe::Value("tick".into()));
/// assert_eq!(null.text, Maybe::Null);
/// assert_eq!(missing.text, Maybe::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<T> {
    /// The field was not part of the document at all.
    Absent,
    /// The field was present with an explicit `null`.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Maybe::Null)
    }

    /// The contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Maybe::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(value) => Maybe::Value(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(value) => Maybe::Value(f(value)),
        }
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Value(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the field is present: a missing field goes
        // through `#[serde(default)]` and stays Absent.
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Maybe::Null,
            Some(value) => Maybe::Value(value),
        })
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent fields are expected to be skipped by the field
            // attribute; if one slips through, `null` is the closest wire
            // rendering.
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(value) => value.serialize(serializer),
        }
    }
}

/// (De)serializes `Maybe<OffsetDateTime>` as an RFC 3339 string.
///
/// Declare the field with
/// `#[serde(with = "c8y_model::maybe::rfc3339", default, skip_serializing_if = "Maybe::is_absent")]`.
pub mod rfc3339 {
    use super::Maybe;
    use serde::de;
    use serde::ser;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    pub fn serialize<S>(value: &Maybe<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(timestamp) => {
                let formatted = timestamp.format(&Rfc3339).map_err(ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Maybe<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Maybe::<String>::deserialize(deserializer)? {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(raw) => {
                let parsed =
                    OffsetDateTime::parse(&raw, &Rfc3339).map_err(de::Error::custom)?;
                Maybe::Value(parsed)
            }
        })
    }
}
