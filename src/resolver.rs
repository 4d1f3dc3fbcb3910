//! Field name resolution: mapping expression chains to dotted,
//! serialization-aware field paths.
//!
//! A field reference like `c.SubDoc.Prop` resolves to the path the
//! document store actually sees after serialization, e.g.
//! `c.subDoc.prop`. Explicit serialized names declared on a member (via
//! annotations) take precedence over the casing policy; conventions are
//! consulted in resolver order and the first declared name wins.

use crate::ast::{Expr, Member};

/// Resolves an expression to a dotted field path.
///
/// Returns `None` when the expression is not a field reference. That is
/// a negative result, not an error: callers fall back to treating the
/// expression as a parameter value.
pub trait FieldNameResolver {
    fn resolve(&self, expr: &Expr) -> Option<String>;
}

/// One source of explicit serialized names for members.
///
/// Implementations inspect member metadata and report the declared name,
/// if any. The default resolver consults conventions in order; the first
/// one that declares a name wins.
pub trait NamingConvention {
    fn declared_name(&self, member: &Member) -> Option<String>;
}

/// A naming convention backed by a single member annotation.
///
/// Mirrors attribute-driven renames in serialization frameworks: the
/// convention declares a name exactly when the member carries the
/// annotation with a non-empty value.
#[derive(Debug, Clone)]
pub struct AnnotationConvention {
    annotation: String,
}

impl AnnotationConvention {
    pub fn new(annotation: impl Into<String>) -> Self {
        AnnotationConvention {
            annotation: annotation.into(),
        }
    }
}

impl NamingConvention for AnnotationConvention {
    fn declared_name(&self, member: &Member) -> Option<String> {
        member
            .annotation(&self.annotation)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// Casing applied to member names that carry no explicit serialized
/// name. Fixed at resolver construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCasing {
    /// Lowercase the first character (`FirstName` → `firstName`)
    Camel,
    /// Use the declared name unchanged
    Preserve,
}

impl FieldCasing {
    fn apply(self, name: &str) -> String {
        match self {
            FieldCasing::Preserve => name.to_string(),
            FieldCasing::Camel => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// The default [`FieldNameResolver`].
///
/// Resolution walks the expression chain innermost first:
///
/// - a binding resolves to its bound name;
/// - a member access resolves only if its inner expression resolves,
///   appending `.` plus the member's serialized name;
/// - a conversion is transparent;
/// - anything else is not a field reference.
///
/// Out of the box it recognizes the `serde_rename` annotation first,
/// then `json_property`, then falls back to the member name under the
/// configured casing.
pub struct DefaultFieldNameResolver {
    conventions: Vec<Box<dyn NamingConvention>>,
    casing: FieldCasing,
}

/// Annotation key checked first for an explicit serialized name.
pub const SERDE_RENAME: &str = "serde_rename";

/// Annotation key checked second for an explicit serialized name.
pub const JSON_PROPERTY: &str = "json_property";

impl Default for DefaultFieldNameResolver {
    fn default() -> Self {
        Self::new(FieldCasing::Camel)
    }
}

impl DefaultFieldNameResolver {
    /// Creates a resolver with the standard conventions and the given
    /// casing policy.
    pub fn new(casing: FieldCasing) -> Self {
        DefaultFieldNameResolver {
            conventions: vec![
                Box::new(AnnotationConvention::new(SERDE_RENAME)),
                Box::new(AnnotationConvention::new(JSON_PROPERTY)),
            ],
            casing,
        }
    }

    /// Creates a resolver with custom conventions, consulted in order.
    pub fn with_conventions(
        conventions: Vec<Box<dyn NamingConvention>>,
        casing: FieldCasing,
    ) -> Self {
        DefaultFieldNameResolver {
            conventions,
            casing,
        }
    }

    /// Serialized name for a member: first convention that declares one
    /// wins, otherwise the declared name under the casing policy.
    fn serialized_name(&self, member: &Member) -> String {
        for convention in &self.conventions {
            if let Some(name) = convention.declared_name(member) {
                return name;
            }
        }
        self.casing.apply(member.name())
    }
}

impl FieldNameResolver for DefaultFieldNameResolver {
    fn resolve(&self, expr: &Expr) -> Option<String> {
        match expr {
            Expr::Binding(name) if !name.is_empty() => Some(name.clone()),
            Expr::Member { object, member } => {
                let inner = self.resolve(object)?;
                Some(format!("{}.{}", inner, self.serialized_name(member)))
            }
            Expr::Convert(inner) => self.resolve(inner),
            _ => None,
        }
    }
}
