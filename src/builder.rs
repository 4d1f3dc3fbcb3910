//! The placeholder template compiler: turns a query template containing
//! numbered placeholders (`{0}`, `{1}`, …) plus a slice of values into
//! final query text and an ordered parameter table.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::params::Parameters;
use crate::value::Value;

/// Errors produced while building a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A placeholder referenced a value index beyond the supplied values
    PlaceholderOutOfRange { index: usize, supplied: usize },

    /// A typed template did not have the expected interpolated-string
    /// shape, or a placeholder token was not a usable index
    MalformedTemplate(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::PlaceholderOutOfRange { index, supplied } => write!(
                f,
                "No value provided for placeholder {{{}}} ({} value(s) supplied)",
                index, supplied
            ),
            QueryError::MalformedTemplate(msg) => write!(f, "Malformed template: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

/// Matches numbered placeholder tokens like `{0}`, `{17}`.
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Replaces numbered placeholders with generated parameter names and
/// builds the parameter table.
///
/// Placeholders are processed left to right with one shared `@p<N>`
/// counter, so names are unique and strictly increasing regardless of
/// how many parameters a single placeholder expands into. A value index
/// referenced at several placeholder sites is processed once; later
/// sites reuse the first replacement text verbatim and add no table
/// entries.
///
/// Sequence values ([`Value::Array`]) expand into one parameter per
/// element in element order, substituted as `(@pA, @pB, …)` for `IN`
/// clauses; an empty sequence substitutes the literal `()` and binds
/// nothing. Every other value, `Value::Null` included, binds as a single
/// parameter.
///
/// Errors abort the whole call before any output is returned.
///
/// # Examples
///
/// ```
/// use querydef::build_query;
///
/// let (text, params) = build_query(
///     "SELECT * FROM c WHERE c.name = {0} AND c.age = {1}",
///     &["Alice".into(), 30.into()],
/// ).unwrap();
///
/// assert_eq!(text, "SELECT * FROM c WHERE c.name = @p0 AND c.age = @p1");
/// assert_eq!(params.len(), 2);
/// ```
pub fn build_query(template: &str, values: &[Value]) -> Result<(String, Parameters), QueryError> {
    let mut text = String::with_capacity(template.len());
    let mut parameters = Parameters::new();
    let mut next_param = 0usize;
    let mut replacements: HashMap<usize, String> = HashMap::new();
    let mut tail = 0usize;

    for token in PLACEHOLDER.find_iter(template) {
        let digits = &template[token.start() + 1..token.end() - 1];
        let index: usize = digits.parse().map_err(|_| {
            QueryError::MalformedTemplate(format!(
                "placeholder {} is not a usable index",
                token.as_str()
            ))
        })?;

        if index >= values.len() {
            return Err(QueryError::PlaceholderOutOfRange {
                index,
                supplied: values.len(),
            });
        }

        text.push_str(&template[tail..token.start()]);
        tail = token.end();

        if let Some(existing) = replacements.get(&index) {
            text.push_str(existing);
            continue;
        }

        let replacement = match &values[index] {
            Value::Array(items) if items.is_empty() => "()".to_string(),
            Value::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    let name = format!("@p{}", next_param);
                    next_param += 1;
                    parameters.push(name.clone(), item.clone());
                    names.push(name);
                }
                format!("({})", names.join(", "))
            }
            scalar => {
                let name = format!("@p{}", next_param);
                next_param += 1;
                parameters.push(name.clone(), scalar.clone());
                name
            }
        };

        text.push_str(&replacement);
        replacements.insert(index, replacement);
    }

    text.push_str(&template[tail..]);
    Ok((text, parameters))
}
