//! Static field descriptors and the case-insensitive field resolver.
//!
//! Every queryable record type registers a fixed table of
//! [`FieldDescriptor`]s. Sort and filter column names coming from a request
//! are looked up in that table and nowhere else, so an unknown name can only
//! ever produce [`QueryError::FieldNotFound`].

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::QueryError;

/// Storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number.
    Integer,
    /// Floating-point number.
    Float,
    /// Text.
    Text,
}

/// A borrowed view of one field's value on a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Order two values of the same field.
    ///
    /// Text compares ordinally (byte-wise), floats use IEEE total ordering.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// String representation used by prefix filtering.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(v) => Cow::Owned(v.to_string()),
            Self::Float(v) => Cow::Owned(v.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

/// One entry of a record type's field table.
pub struct FieldDescriptor<R> {
    name: &'static str,
    column: &'static str,
    kind: FieldKind,
    read: fn(&R) -> FieldValue<'_>,
}

impl<R> FieldDescriptor<R> {
    /// Describe a field.
    ///
    /// `name` is the public (API) name matched case-insensitively, `column`
    /// the storage column a push-down source may reference.
    pub const fn new(
        name: &'static str,
        column: &'static str,
        kind: FieldKind,
        read: fn(&R) -> FieldValue<'_>,
    ) -> Self {
        Self {
            name,
            column,
            kind,
            read,
        }
    }

    /// Public field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Storage column name.
    pub fn column(&self) -> &'static str {
        self.column
    }

    /// Storage type.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Read the field from a record.
    pub fn read<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.read)(record)
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A record type with a statically known set of queryable fields.
pub trait Record: Sized + Send + Sync + 'static {
    /// Entity name reported in errors and logs.
    const ENTITY: &'static str;

    /// The field table. Must be the same slice on every call.
    fn fields() -> &'static [FieldDescriptor<Self>];
}

/// A resolved, type-checked accessor for one field of `R`.
pub struct FieldHandle<R: 'static> {
    descriptor: &'static FieldDescriptor<R>,
}

impl<R: 'static> Clone for FieldHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for FieldHandle<R> {}

impl<R: 'static> fmt::Debug for FieldHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldHandle").field(&self.descriptor.name).finish()
    }
}

impl<R: Record> FieldHandle<R> {
    /// Look up a field by name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<Self> {
        R::fields()
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
            .map(|descriptor| Self { descriptor })
    }

    /// Canonical public name (as registered, not as requested).
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Storage column name.
    pub fn column(&self) -> &'static str {
        self.descriptor.column
    }

    /// Storage type.
    pub fn kind(&self) -> FieldKind {
        self.descriptor.kind
    }

    /// Read this field from a record.
    pub fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        self.descriptor.read(record)
    }

    /// Compare two records by this field.
    pub fn compare_for_sort(&self, a: &R, b: &R) -> Ordering {
        self.value(a).compare(&self.value(b))
    }

    /// Case-insensitive "starts with" on the field's string representation.
    pub fn text_prefix_match(&self, record: &R, needle: &str) -> bool {
        self.starts_with_folded(record, &fold_case(needle))
    }

    pub(crate) fn starts_with_folded(&self, record: &R, folded_needle: &str) -> bool {
        fold_case(&self.value(record).render()).starts_with(folded_needle)
    }
}

/// Resolve a caller-supplied field name against `R`'s field table.
pub fn resolve<R: Record>(name: &str) -> Result<FieldHandle<R>, QueryError> {
    FieldHandle::lookup(name).ok_or_else(|| QueryError::FieldNotFound {
        entity: R::ENTITY,
        field: name.to_string(),
    })
}

/// Locale-independent case folding.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
