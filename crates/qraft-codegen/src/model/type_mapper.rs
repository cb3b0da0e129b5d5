use crate::ast;
use crate::model::ScalarTarget;
use crate::model::TargetType;
use crate::schema::Schema;
use crate::schema::TypeKind;

/// Suffix appended to an interface type's name to refer to its synthetic
/// merged struct.
pub(crate) const FRAGMENT_SUFFIX: &str = "Fragment";

/// Suffix appended to a union type's name to refer to its synthetic
/// merged struct.
pub(crate) const UNION_SUFFIX: &str = "Union";

/// Maps a GraphQL type annotation to its [`TargetType`].
///
/// Pure with respect to the schema: the same annotation always maps to
/// the same target type, regardless of traversal order or selection.
/// Built-in scalars map to fixed primitives (`Float` to a floating-point
/// target), custom scalars and other named types map to their own name,
/// and interface/union names are suffixed to refer to the synthetic
/// merged type -- uniformly, standalone or at any list nesting depth.
pub fn map_type(schema: &Schema, annotation: &ast::schema::Type) -> TargetType {
    match annotation {
        ast::schema::Type::NonNullType(inner) => map_type(schema, inner),

        ast::schema::Type::ListType(inner) =>
            TargetType::List(Box::new(map_type(schema, inner))),

        ast::schema::Type::NamedType(name) => map_named_type(schema, name),
    }
}

fn map_named_type(schema: &Schema, name: &str) -> TargetType {
    match name {
        "String" => TargetType::Scalar(ScalarTarget::String),
        "ID" => TargetType::Scalar(ScalarTarget::Id),
        "Int" => TargetType::Scalar(ScalarTarget::Int),
        "Float" => TargetType::Scalar(ScalarTarget::Float),
        "Boolean" => TargetType::Scalar(ScalarTarget::Bool),
        _ => match schema.type_named(name).map(|schema_type| schema_type.kind()) {
            Some(TypeKind::Interface) =>
                TargetType::Named(format!("{name}{FRAGMENT_SUFFIX}")),
            Some(TypeKind::Union) =>
                TargetType::Named(format!("{name}{UNION_SUFFIX}")),
            _ => TargetType::Named(name.to_string()),
        },
    }
}
