use crate::value::Value;

/// The ordered parameter table produced by a query build.
///
/// Entries are kept in first-use order: the builder assigns names
/// `@p0`, `@p1`, … with a single counter per build call, so iteration
/// order always matches the order parameters first appear in the query
/// text. The table never reorders or merges entries.
///
/// # Examples
///
/// ```
/// use querydef::{build, Value};
///
/// let query = build("SELECT * FROM c WHERE c.name = {0}", &["Alice".into()]).unwrap();
/// let params = query.parameters();
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("@p0"), Some(&Value::String("Alice".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    /// Creates an empty parameter table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. Names are generated by the builder and are
    /// unique per build call, so no collision handling is needed here.
    pub(crate) fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    /// Looks up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterates parameter names in first-use order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl IntoIterator for Parameters {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
