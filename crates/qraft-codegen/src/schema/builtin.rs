/// The scalar type names built into the GraphQL specification.
///
/// These map directly to target-language primitives, are never entered in
/// the [`Schema`](crate::schema::Schema) type table, and are never
/// registered in a type closure.
pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Returns true if `type_name` is one of the five built-in GraphQL
/// scalars (`String`, `Int`, `Float`, `Boolean`, `ID`).
pub fn is_builtin_scalar(type_name: &str) -> bool {
    BUILTIN_SCALAR_NAMES.contains(&type_name)
}
