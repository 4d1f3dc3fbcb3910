//! The expression template extractor: walks a typed interpolated-string
//! template, classifies each argument as a field reference or a value,
//! and hands the rewritten template to the placeholder compiler.

use crate::ast::Expr;
use crate::builder::{self, QueryError};
use crate::params::Parameters;
use crate::resolver::FieldNameResolver;
use crate::value::Value;

/// Extracts query text and parameters from an interpolated-string
/// template expression.
///
/// The expression must be the canonical shape produced by
/// [`Expr::interpolated`]: a `format` call applied to a constant format
/// string and an ordered argument list. Anything else fails with
/// [`QueryError::MalformedTemplate`] naming the unexpected shape.
///
/// Arguments are classified left to right:
///
/// - an argument the resolver maps to a field path is substituted as
///   literal text at its position (trusted structural text, no
///   parameter, no escaping);
/// - any other argument must carry a concrete value
///   ([`Expr::Captured`] or [`Expr::Constant`], possibly behind
///   conversions); the value becomes a new slot and the argument
///   position is rewritten to that slot's numbered placeholder.
///
/// The rewritten format string and collected slots then go through
/// [`builder::build_query`] for numbering, reuse, and sequence
/// expansion, so both entry paths share one compiler.
///
/// # Examples
///
/// ```
/// use querydef::{parameterize_expression, DefaultFieldNameResolver, Expr, Member};
///
/// // $"SELECT * FROM c WHERE {c.Name} = {name}"
/// let expr = Expr::interpolated(
///     "SELECT * FROM c WHERE {0} = {1}",
///     vec![
///         Expr::binding("c").field(Member::new("Name")),
///         Expr::captured("Alice"),
///     ],
/// );
///
/// let resolver = DefaultFieldNameResolver::default();
/// let (text, params) = parameterize_expression(&expr, &resolver).unwrap();
///
/// assert_eq!(text, "SELECT * FROM c WHERE c.name = @p0");
/// assert_eq!(params.len(), 1);
/// ```
pub fn parameterize_expression(
    expr: &Expr,
    resolver: &dyn FieldNameResolver,
) -> Result<(String, Parameters), QueryError> {
    let (format, args) = template_shape(expr)?;

    let mut slots: Vec<Value> = Vec::new();
    let mut rewritten_args: Vec<String> = Vec::with_capacity(args.len());

    for arg in args {
        if let Some(path) = resolver.resolve(arg) {
            rewritten_args.push(path);
            continue;
        }

        let value = capture_value(arg)?;
        slots.push(value);
        rewritten_args.push(format!("{{{}}}", slots.len() - 1));
    }

    let rewritten = format_positional(format, &rewritten_args)?;
    builder::build_query(&rewritten, &slots)
}

/// Validates the interpolated-string shape and pulls out the format
/// string and argument list.
fn template_shape(expr: &Expr) -> Result<(&str, &[Expr]), QueryError> {
    let Expr::Call { function, args } = expr else {
        return Err(QueryError::MalformedTemplate(format!(
            "expected an interpolated-string call, found {}",
            expr.kind()
        )));
    };

    if function != "format" {
        return Err(QueryError::MalformedTemplate(format!(
            "expected a call to `format`, found a call to `{}`",
            function
        )));
    }

    let [format_arg, list_arg] = args.as_slice() else {
        return Err(QueryError::MalformedTemplate(format!(
            "expected a format string and an argument list, found {} argument(s)",
            args.len()
        )));
    };

    let Expr::Constant(Value::String(format)) = format_arg else {
        return Err(QueryError::MalformedTemplate(format!(
            "format string is not a string constant (found {})",
            format_arg.kind()
        )));
    };

    let Expr::List(items) = list_arg else {
        return Err(QueryError::MalformedTemplate(format!(
            "expected an argument list, found {}",
            list_arg.kind()
        )));
    };

    Ok((format.as_str(), items.as_slice()))
}

/// Reads the concrete value an argument carries. Conversions are
/// transparent; anything without a captured or constant value is a
/// structural error, since arguments are evaluated when the template is
/// constructed, never here.
fn capture_value(expr: &Expr) -> Result<Value, QueryError> {
    match expr {
        Expr::Constant(value) | Expr::Captured(value) => Ok(value.clone()),
        Expr::Convert(inner) => capture_value(inner),
        other => Err(QueryError::MalformedTemplate(format!(
            "argument is neither a field reference nor a captured value (found {})",
            other.kind()
        ))),
    }
}

/// Applies positional arguments to a format string: each `{i}` token is
/// replaced by `args[i]` as-is. Used for the rewrite step only; the
/// substituted text is either a resolved field path or a slot
/// placeholder for the compiler.
fn format_positional(format: &str, args: &[String]) -> Result<String, QueryError> {
    let mut out = String::with_capacity(format.len());
    let mut tail = 0usize;

    for token in builder::PLACEHOLDER.find_iter(format) {
        let digits = &format[token.start() + 1..token.end() - 1];
        let index: usize = digits.parse().map_err(|_| {
            QueryError::MalformedTemplate(format!(
                "format argument {} is not a usable index",
                token.as_str()
            ))
        })?;

        if index >= args.len() {
            return Err(QueryError::PlaceholderOutOfRange {
                index,
                supplied: args.len(),
            });
        }

        out.push_str(&format[tail..token.start()]);
        out.push_str(&args[index]);
        tail = token.end();
    }

    out.push_str(&format[tail..]);
    Ok(out)
}
