use std::fmt;

use crate::ast::Expr;
use crate::builder::{self, QueryError};
use crate::extract;
use crate::params::Parameters;
use crate::resolver::{DefaultFieldNameResolver, FieldNameResolver};
use crate::value::Value;

/// A fully built query: final text plus its ordered parameter table.
///
/// This is the crate's output contract. A store client's query object is
/// constructed from the two parts, e.g. by binding each parameter in
/// order onto the client's query type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedQuery {
    text: String,
    parameters: Parameters,
}

impl ParameterizedQuery {
    /// The query text with placeholders replaced by parameter names.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bound parameters in first-use order.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Splits the query into its text and parameter table.
    pub fn into_parts(self) -> (String, Parameters) {
        (self.text, self.parameters)
    }
}

impl fmt::Display for ParameterizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds a parameterized query from a raw template with numbered
/// placeholders (`{0}`, `{1}`, …) and positional values.
///
/// # Examples
///
/// ```
/// use querydef::build;
///
/// let query = build(
///     "SELECT * FROM c WHERE c.id IN {0}",
///     &[vec!["a", "b"].into()],
/// ).unwrap();
///
/// assert_eq!(query.text(), "SELECT * FROM c WHERE c.id IN (@p0, @p1)");
/// ```
pub fn build(template: &str, values: &[Value]) -> Result<ParameterizedQuery, QueryError> {
    let (text, parameters) = builder::build_query(template, values)?;
    Ok(ParameterizedQuery { text, parameters })
}

/// Builds a parameterized query from a typed interpolated-string
/// template, resolving field references with the given resolver.
pub fn build_expr(
    expr: &Expr,
    resolver: &dyn FieldNameResolver,
) -> Result<ParameterizedQuery, QueryError> {
    let (text, parameters) = extract::parameterize_expression(expr, resolver)?;
    Ok(ParameterizedQuery { text, parameters })
}

/// [`build_expr`] with the default camel-casing resolver.
pub fn build_expr_default(expr: &Expr) -> Result<ParameterizedQuery, QueryError> {
    build_expr(expr, &DefaultFieldNameResolver::default())
}
