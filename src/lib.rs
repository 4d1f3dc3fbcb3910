pub mod ast;
pub mod builder;
pub mod convert;
pub mod extract;
pub mod params;
pub mod query;
pub mod resolver;
pub mod value;

pub use ast::{Expr, Member};
pub use builder::{QueryError, build_query};
pub use convert::{json_to_value, value_to_json};
pub use extract::parameterize_expression;
pub use params::Parameters;
pub use query::{ParameterizedQuery, build, build_expr, build_expr_default};
pub use resolver::{
    AnnotationConvention, DefaultFieldNameResolver, FieldCasing, FieldNameResolver,
    JSON_PROPERTY, NamingConvention, SERDE_RENAME,
};
pub use value::Value;
