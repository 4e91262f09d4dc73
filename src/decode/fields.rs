//! Typed access to the fields of a JSON object, with error locations.
//!
//! Locations are a linked list of [`Loc`] frames living on the stack, so the
//! happy path never allocates a path string; it is rendered only when an error
//! is built.

use crate::error::DecodeError;
use crate::model::Id;
use serde_json::{Map, Value};
use std::fmt::{self, Write as _};

type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Clone, Copy)]
enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

/// Position of a value inside the document.
#[derive(Clone, Copy)]
pub(crate) struct Loc<'p> {
    parent: Option<&'p Loc<'p>>,
    segment: Option<Segment<'p>>,
}

impl Loc<'static> {
    pub(crate) const ROOT: Self = Self {
        parent: None,
        segment: None,
    };
}

impl<'p> Loc<'p> {
    pub(crate) const fn key<'q>(&'q self, key: &'q str) -> Loc<'q> {
        Loc {
            parent: Some(self),
            segment: Some(Segment::Key(key)),
        }
    }

    pub(crate) const fn index(&self, index: usize) -> Loc<'_> {
        Loc {
            parent: Some(self),
            segment: Some(Segment::Index(index)),
        }
    }
}

impl fmt::Display for Loc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = Vec::new();
        let mut frame = Some(self);
        while let Some(loc) = frame {
            if let Some(segment) = loc.segment {
                segments.push(segment);
            }
            frame = loc.parent;
        }

        f.write_char('$')?;
        for segment in segments.iter().rev() {
            match segment {
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Human-readable name of a JSON value's type, for mismatch messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn mismatch(loc: Loc<'_>, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        path: loc.to_string(),
        expected,
        found: json_kind(found),
    }
}

/// An unknown bare-string variant, e.g. a `StructType` of `"Record"`.
pub(crate) fn unknown_name(loc: Loc<'_>, union: &'static str, name: &str) -> DecodeError {
    DecodeError::UnknownVariant {
        path: loc.to_string(),
        union,
        tag: name.to_string(),
    }
}

pub(crate) fn string(value: &Value, loc: Loc<'_>) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(loc, "a string", value))
}

pub(crate) fn id(value: &Value, loc: Loc<'_>) -> Result<Id> {
    string(value, loc).map(Id)
}

pub(crate) fn unsigned(value: &Value, loc: Loc<'_>) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| mismatch(loc, "an unsigned integer", value))
}

pub(crate) fn array<'v>(value: &'v Value, loc: Loc<'_>) -> Result<&'v [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(loc, "an array", value))
}

/// Decodes a fixed-size JSON array such as `[line, column]`.
pub(crate) fn pair<'v, A, B>(
    value: &'v Value,
    loc: Loc<'_>,
    first: impl FnOnce(&'v Value, Loc<'_>) -> Result<A>,
    second: impl FnOnce(&'v Value, Loc<'_>) -> Result<B>,
) -> Result<(A, B)> {
    match array(value, loc)? {
        [a, b] => Ok((first(a, loc.index(0))?, second(b, loc.index(1))?)),
        _ => Err(mismatch(loc, "a two-element array", value)),
    }
}

/// The fields of one JSON object.
#[derive(Clone, Copy)]
pub(crate) struct Fields<'v, 'p> {
    map: &'v Map<String, Value>,
    loc: Loc<'p>,
}

impl<'v, 'p> Fields<'v, 'p> {
    pub(crate) fn object(value: &'v Value, loc: Loc<'p>) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, loc }),
            other => Err(mismatch(loc, "an object", other)),
        }
    }

    pub(crate) const fn loc(&self) -> Loc<'p> {
        self.loc
    }

    /// Entries in the map's iteration order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&'v String, &'v Value)> + use<'v, 'p> {
        self.map.iter()
    }

    /// The value at `key`, treating an explicit `null` as absent.
    pub(crate) fn get(&self, key: &str) -> Option<&'v Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn required(&self, key: &'static str) -> Result<&'v Value> {
        self.get(key).ok_or_else(|| DecodeError::MissingField {
            path: self.loc.to_string(),
            field: key,
        })
    }

    /// Reads the `tag` discriminant of a tagged union.
    pub(crate) fn tag(&self) -> Result<&'v str> {
        let value = self.required("tag")?;
        value
            .as_str()
            .ok_or_else(|| mismatch(self.loc.key("tag"), "a string", value))
    }

    pub(crate) fn unknown_variant(&self, union: &'static str, tag: &str) -> DecodeError {
        DecodeError::UnknownVariant {
            path: self.loc.key("tag").to_string(),
            union,
            tag: tag.to_string(),
        }
    }

    /// Decodes a required field with `decode`.
    pub(crate) fn nested<T>(
        &self,
        key: &'static str,
        decode: impl FnOnce(&'v Value, Loc<'_>) -> Result<T>,
    ) -> Result<T> {
        let value = self.required(key)?;
        decode(value, self.loc.key(key))
    }

    /// Decodes an optional field with `decode`; absent and `null` give `None`.
    pub(crate) fn optional<T>(
        &self,
        key: &'static str,
        decode: impl FnOnce(&'v Value, Loc<'_>) -> Result<T>,
    ) -> Result<Option<T>> {
        self.get(key)
            .map(|value| decode(value, self.loc.key(key)))
            .transpose()
    }

    /// Decodes a required array field element by element.
    pub(crate) fn list<T>(
        &self,
        key: &'static str,
        mut decode: impl FnMut(&'v Value, Loc<'_>) -> Result<T>,
    ) -> Result<Vec<T>> {
        let value = self.required(key)?;
        let loc = self.loc.key(key);
        array(value, loc)?
            .iter()
            .enumerate()
            .map(|(i, element)| decode(element, loc.index(i)))
            .collect()
    }

    /// Decodes a required object field as a map.
    pub(crate) fn map<K, V, C>(
        &self,
        key: &'static str,
        mut decode: impl FnMut(&'v str, &'v Value, Loc<'_>) -> Result<(K, V)>,
    ) -> Result<C>
    where
        C: FromIterator<(K, V)>,
    {
        let value = self.required(key)?;
        let fields = Fields::object(value, self.loc.key(key))?;
        fields
            .map
            .iter()
            .map(|(k, v)| decode(k.as_str(), v, fields.loc.key(k)))
            .collect()
    }

    pub(crate) fn string(&self, key: &'static str) -> Result<String> {
        self.nested(key, string)
    }

    pub(crate) fn opt_string(&self, key: &'static str) -> Result<Option<String>> {
        self.optional(key, string)
    }

    pub(crate) fn bool(&self, key: &'static str) -> Result<bool> {
        self.nested(key, |value, loc| {
            value.as_bool().ok_or_else(|| mismatch(loc, "a boolean", value))
        })
    }

    pub(crate) fn u32(&self, key: &'static str) -> Result<u32> {
        self.nested(key, |value, loc| {
            value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| mismatch(loc, "a 32-bit unsigned integer", value))
        })
    }

    pub(crate) fn id(&self, key: &'static str) -> Result<Id> {
        self.nested(key, id)
    }

    pub(crate) fn opt_id(&self, key: &'static str) -> Result<Option<Id>> {
        self.optional(key, id)
    }

    pub(crate) fn ids(&self, key: &'static str) -> Result<Vec<Id>> {
        self.list(key, id)
    }

    pub(crate) fn strings(&self, key: &'static str) -> Result<Vec<String>> {
        self.list(key, string)
    }
}
