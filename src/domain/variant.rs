// ============================================================================
// Variant
// Dynamically typed value over a closed set of kinds
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Variant Kind
// ============================================================================

/// Kind tag of a value-bearing [`Variant`].
///
/// Declaration order is the cross-kind rank used by the comparator, so new
/// kinds must be appended, not inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariantKind {
    Bool,
    Int,
    UInt,
    LongLong,
    ULongLong,
    Double,
    Char,
    Date,
    Time,
    DateTime,
    String,
    StringList,
    List,
    Bytes,
    Other,
}

impl VariantKind {
    /// Position in the cross-kind order.
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Integer and floating point kinds.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            VariantKind::Int
                | VariantKind::UInt
                | VariantKind::LongLong
                | VariantKind::ULongLong
                | VariantKind::Double
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Bool => "bool",
            VariantKind::Int => "int",
            VariantKind::UInt => "uint",
            VariantKind::LongLong => "longlong",
            VariantKind::ULongLong => "ulonglong",
            VariantKind::Double => "double",
            VariantKind::Char => "char",
            VariantKind::Date => "date",
            VariantKind::Time => "time",
            VariantKind::DateTime => "datetime",
            VariantKind::String => "string",
            VariantKind::StringList => "stringlist",
            VariantKind::List => "list",
            VariantKind::Bytes => "bytes",
            VariantKind::Other => "other",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Variant
// ============================================================================

/// A dynamically typed value.
///
/// `Invalid` carries no type at all. `Null(kind)` has a type but no value.
/// Every other variant carries a payload of its kind.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    #[default]
    Invalid,
    Null(VariantKind),
    Bool(bool),
    Int(i32),
    UInt(u32),
    LongLong(i64),
    ULongLong(u64),
    Double(f64),
    Char(char),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    String(String),
    StringList(Vec<String>),
    List(Vec<Variant>),
    Bytes(Vec<u8>),
    /// A value of a kind this enum does not model, kept as text
    Other { type_name: String, text: String },
}

impl Variant {
    /// A typed null.
    pub const fn null(kind: VariantKind) -> Self {
        Variant::Null(kind)
    }

    /// The kind tag; `None` only for `Invalid`.
    pub fn kind(&self) -> Option<VariantKind> {
        let kind = match self {
            Variant::Invalid => return None,
            Variant::Null(kind) => *kind,
            Variant::Bool(_) => VariantKind::Bool,
            Variant::Int(_) => VariantKind::Int,
            Variant::UInt(_) => VariantKind::UInt,
            Variant::LongLong(_) => VariantKind::LongLong,
            Variant::ULongLong(_) => VariantKind::ULongLong,
            Variant::Double(_) => VariantKind::Double,
            Variant::Char(_) => VariantKind::Char,
            Variant::Date(_) => VariantKind::Date,
            Variant::Time(_) => VariantKind::Time,
            Variant::DateTime(_) => VariantKind::DateTime,
            Variant::String(_) => VariantKind::String,
            Variant::StringList(_) => VariantKind::StringList,
            Variant::List(_) => VariantKind::List,
            Variant::Bytes(_) => VariantKind::Bytes,
            Variant::Other { .. } => VariantKind::Other,
        };
        Some(kind)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Variant::Invalid)
    }

    /// True for typed nulls. `Invalid` is not null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null(_))
    }

    /// Type name for error messages and debugging.
    pub fn type_name(&self) -> &str {
        match self {
            Variant::Invalid => "invalid",
            Variant::Other { type_name, .. } => type_name,
            other => other.kind().map_or("invalid", VariantKind::name),
        }
    }

    /// Human-readable rendering of the payload.
    ///
    /// This is also the representation the comparator falls back to for
    /// kinds without a native order.
    pub fn to_display_string(&self) -> String {
        match self {
            Variant::Invalid => String::new(),
            Variant::Null(_) => "NULL".to_string(),
            Variant::Bool(b) => b.to_string(),
            Variant::Int(i) => i.to_string(),
            Variant::UInt(u) => u.to_string(),
            Variant::LongLong(i) => i.to_string(),
            Variant::ULongLong(u) => u.to_string(),
            Variant::Double(d) => d.to_string(),
            Variant::Char(c) => c.to_string(),
            Variant::Date(d) => d.format("%Y-%m-%d").to_string(),
            Variant::Time(t) => t.format("%H:%M:%S%.f").to_string(),
            Variant::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Variant::String(s) => s.clone(),
            Variant::StringList(items) => format!("[{}]", items.join(", ")),
            Variant::List(items) => {
                let elements: Vec<String> = items.iter().map(Variant::to_display_string).collect();
                format!("[{}]", elements.join(", "))
            },
            Variant::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Variant::Other { text, .. } => text.clone(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                #[inline]
                fn from(value: $ty) -> Self {
                    Variant::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    f64 => Double,
    char => Char,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    String => String,
    Vec<String> => StringList,
    Vec<Variant> => List,
    Vec<u8> => Bytes,
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<Vec<&str>> for Variant {
    fn from(values: Vec<&str>) -> Self {
        Variant::StringList(values.into_iter().map(str::to_string).collect())
    }
}

impl<T> From<Option<T>> for Variant
where
    T: Into<Variant> + KindOf,
{
    /// `None` becomes a typed null of `T`'s kind.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Variant::Null(T::KIND),
        }
    }
}

/// Static kind of a Rust payload type.
pub trait KindOf {
    const KIND: VariantKind;
}

macro_rules! impl_kind_of {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl KindOf for $ty {
                const KIND: VariantKind = VariantKind::$kind;
            }
        )*
    };
}

impl_kind_of! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    f64 => Double,
    char => Char,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    String => String,
    Vec<String> => StringList,
    Vec<Variant> => List,
    Vec<u8> => Bytes,
}
