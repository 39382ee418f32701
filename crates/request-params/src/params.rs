//! Named request parameters and an ordered builder for them.
//!
//! A [`Param`] carries its value already rendered to its canonical string
//! form, or nothing at all when the caller has no value to send. Absent
//! parameters are kept in the sequence and dropped by the encoder, so a
//! parameter list can be assembled from optional fields without branching.

use std::fmt::{self, Display};

/// A named value destined for a query string or request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    key: String,
    value: Option<String>,
}

impl Param {
    /// Create a parameter from an optional value.
    pub fn new<T>(key: impl Into<String>, value: Option<T>) -> Self
    where
        T: Display,
    {
        Self {
            key: key.into(),
            value: value.map(|value| value.to_string()),
        }
    }

    /// Create a parameter with a value.
    pub fn present<T>(key: impl Into<String>, value: T) -> Self
    where
        T: Display,
    {
        Self {
            key: key.into(),
            value: Some(value.to_string()),
        }
    }

    /// Create a parameter with no value.
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Canonical string value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns true if the parameter has no value.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Key/value pair for a present parameter.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        self.value().map(|value| (self.key(), value))
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}=<absent>", self.key),
        }
    }
}

/// Ordered builder for a sequence of parameters.
///
/// Order is preserved and duplicate keys are allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    entries: Vec<Param>,
}

impl Params {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a parameter, recording it as absent when the value is `None`.
    pub fn push_opt<T>(&mut self, key: impl Into<String>, value: Option<T>)
    where
        T: Display,
    {
        self.entries.push(Param::new(key, value));
    }

    /// Append using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: impl Into<String>, value: Option<T>, map: F)
    where
        F: FnOnce(T) -> String,
    {
        self.entries.push(Param {
            key: key.into(),
            value: value.map(map),
        });
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display,
    {
        self.entries.push(Param::present(key, value));
    }

    /// Append an already constructed parameter.
    pub fn push_param(&mut self, param: Param) {
        self.entries.push(param);
    }

    /// Chainable form of [`Params::push`].
    #[must_use]
    pub fn with<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Display,
    {
        self.push(key, value);
        self
    }

    /// Chainable form of [`Params::push_opt`].
    #[must_use]
    pub fn with_opt<T>(mut self, key: impl Into<String>, value: Option<T>) -> Self
    where
        T: Display,
    {
        self.push_opt(key, value);
        self
    }

    /// All parameters, absent ones included.
    #[must_use]
    pub fn as_slice(&self) -> &[Param] {
        &self.entries
    }

    /// Iterate over the key/value pairs of present parameters in order.
    pub fn present_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        present_pairs(&self.entries)
    }

    /// Return the collected parameters.
    #[must_use]
    pub fn into_vec(self) -> Vec<Param> {
        self.entries
    }

    /// Number of parameters, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key/value pairs of the present parameters in `params`, in order.
pub(crate) fn present_pairs(params: &[Param]) -> impl Iterator<Item = (&str, &str)> {
    params.iter().filter_map(Param::as_pair)
}

impl From<Vec<Param>> for Params {
    fn from(entries: Vec<Param>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Param> for Params {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Param> for Params {
    fn extend<I: IntoIterator<Item = Param>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Params {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Param, Params};

    #[test]
    fn push_opt_records_absent() {
        let mut params = Params::new();
        params.push_opt("name", Option::<String>::None);
        assert_eq!(params.len(), 1);
        assert!(params.as_slice()[0].is_absent());
        assert_eq!(params.present_pairs().count(), 0);
    }

    #[test]
    fn push_opt_with_applies_mapper() {
        let mut params = Params::new();
        params.push_opt_with("limit", Some(5u32), |v| format!("{v:02}"));
        assert_eq!(params.into_vec(), vec![Param::present("limit", "05")]);
    }

    #[test]
    fn push_opt_with_skips_mapper_for_none() {
        let mut params = Params::new();
        params.push_opt_with("limit", Option::<u32>::None, |_| unreachable!());
        assert!(params.as_slice()[0].is_absent());
    }

    #[test]
    fn values_use_display_form() {
        let params = Params::new()
            .with("id", 42)
            .with("ratio", 0.5)
            .with("enabled", true);

        let pairs: Vec<_> = params.present_pairs().collect();
        assert_eq!(
            pairs,
            vec![("id", "42"), ("ratio", "0.5"), ("enabled", "true")]
        );
    }

    #[test]
    fn empty_string_is_not_absent() {
        let param = Param::present("q", "");
        assert!(!param.is_absent());
        assert_eq!(param.as_pair(), Some(("q", "")));
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        let params: Params = vec![
            Param::present("a", 1),
            Param::absent("b"),
            Param::present("a", 2),
        ]
        .into();

        let pairs: Vec<_> = params.present_pairs().collect();
        assert_eq!(pairs, vec![("a", "1"), ("a", "2")]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn param_display() {
        assert_eq!(Param::present("id", 7).to_string(), "id=7");
        assert_eq!(Param::absent("id").to_string(), "id=<absent>");
    }
}
