use std::collections::HashMap;

use crate::value::Value;

/// Metadata for one document member referenced from a query expression.
///
/// Carries the member's declared name plus an annotation table mirroring
/// the serialization attributes attached to the member in the document
/// model. Naming conventions (see [`crate::resolver`]) read annotations
/// to find an explicit serialized name; when none applies, the resolver
/// falls back to the declared name under its casing policy.
///
/// # Examples
///
/// ```
/// use querydef::Member;
///
/// let plain = Member::new("FirstName");
/// let renamed = Member::new("FirstName").with_annotation("serde_rename", "first_name");
///
/// assert_eq!(plain.annotation("serde_rename"), None);
/// assert_eq!(renamed.annotation("serde_rename"), Some("first_name"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    name: String,
    annotations: HashMap<String, String>,
}

impl Member {
    /// Creates member metadata with the given declared name and no
    /// annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            annotations: HashMap::new(),
        }
    }

    /// Attaches an annotation (serialization attribute analog).
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// The member's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an annotation value by key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Expression node in a typed query template.
///
/// A field reference is a chain of [`Expr::Member`] nodes rooted at an
/// [`Expr::Binding`], optionally passing through transparent
/// [`Expr::Convert`] wrappers. Everything else evaluates to a value (or
/// fails shape validation in the extractor).
///
/// Value-producing arguments are captured at template-construction time:
/// the builder never executes arbitrary code, it only reads
/// already-evaluated [`Expr::Captured`] and [`Expr::Constant`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Root binding name
    ///
    /// # Example
    /// ```text
    /// c        // the `c` in SELECT * FROM c
    /// ```
    Binding(String),

    /// Member access on an inner expression
    ///
    /// # Example
    /// ```text
    /// c.SubDoc.Prop
    /// ```
    Member {
        object: Box<Expr>,
        member: Member,
    },

    /// Transparent type conversion (widening, boxing and the like);
    /// resolution looks straight through it
    Convert(Box<Expr>),

    /// Literal constant
    Constant(Value),

    /// A captured, already-evaluated value from the template's
    /// surrounding context
    Captured(Value),

    /// Applied function
    ///
    /// An interpolated string template is the shape
    /// `Call { function: "format", args: [Constant(format), List(args)] }`.
    Call {
        function: String,
        args: Vec<Expr>,
    },

    /// Ordered argument list node
    List(Vec<Expr>),
}

impl Expr {
    /// Creates a root binding node.
    pub fn binding(name: impl Into<String>) -> Expr {
        Expr::Binding(name.into())
    }

    /// Creates a literal constant node.
    pub fn constant(value: impl Into<Value>) -> Expr {
        Expr::Constant(value.into())
    }

    /// Creates a captured-value node.
    pub fn captured(value: impl Into<Value>) -> Expr {
        Expr::Captured(value.into())
    }

    /// Wraps this expression in a member access.
    pub fn field(self, member: Member) -> Expr {
        Expr::Member {
            object: Box::new(self),
            member,
        }
    }

    /// Wraps this expression in a transparent conversion.
    pub fn convert(self) -> Expr {
        Expr::Convert(Box::new(self))
    }

    /// Builds the canonical interpolated-string template shape from a
    /// format string and its ordered arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use querydef::{Expr, Member};
    ///
    /// // $"SELECT * FROM c WHERE {c.Name} = {value}"
    /// let expr = Expr::interpolated(
    ///     "SELECT * FROM c WHERE {0} = {1}",
    ///     vec![
    ///         Expr::binding("c").field(Member::new("Name")),
    ///         Expr::captured("Alice"),
    ///     ],
    /// );
    /// ```
    pub fn interpolated(format: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call {
            function: "format".to_string(),
            args: vec![
                Expr::Constant(Value::String(format.into())),
                Expr::List(args),
            ],
        }
    }

    /// Short human-readable name of the node kind, used in shape errors.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Expr::Binding(_) => "binding",
            Expr::Member { .. } => "member access",
            Expr::Convert(_) => "conversion",
            Expr::Constant(_) => "constant",
            Expr::Captured(_) => "captured value",
            Expr::Call { .. } => "call",
            Expr::List(_) => "argument list",
        }
    }
}
