//! LDIF entry record.

use serde::Serialize;

use super::value::Value;

/// Attribute name conventionally holding the distinguished name.
pub const DN: &str = "dn";

/// One directory record: an ordered list of attribute/value pairs.
///
/// Names may repeat, and order is kept exactly as given. The first pair is
/// usually `dn`, but nothing requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    attributes: Vec<(String, Value)>,
}

impl Entry {
    /// Creates an entry from ordered `(name, value)` pairs.
    ///
    /// ```rust
    /// use ldif_rfc::rfc::ldif::{Entry, Value};
    ///
    /// let entry = Entry::new([
    ///     ("dn", Value::from("cn=Barbara Jensen,dc=example,dc=com")),
    ///     ("cn", Value::from("Barbara Jensen")),
    ///     ("jpegPhoto", Value::from(vec![0xff, 0xd8])),
    /// ]);
    /// assert_eq!(entry.len(), 3);
    /// ```
    #[must_use]
    pub fn new<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// All pairs in order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.attributes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names in order, including repeats.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the first value of the named attribute.
    ///
    /// Names are compared case-sensitively.
    #[must_use]
    pub fn get_first(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns every value of the named attribute, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&Value> {
        self.attributes
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v)
            .collect()
    }

    /// Returns the distinguished name if the entry has a text `dn` attribute.
    #[must_use]
    pub fn dn(&self) -> Option<&str> {
        self.get_first(DN).and_then(Value::as_text)
    }

    /// Consumes the entry, returning its pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, Value)> {
        self.attributes
    }
}

impl From<Vec<(String, Value)>> for Entry {
    fn from(attributes: Vec<(String, Value)>) -> Self {
        Self { attributes }
    }
}

impl<N, V> FromIterator<(N, V)> for Entry
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
