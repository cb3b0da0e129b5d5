use crate::ast;
use crate::GenerateError;
use crate::schema::FieldDef;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use indexmap::IndexMap;

/// An immutable index over a parsed GraphQL schema document.
///
/// Named types are keyed by name in schema-document order. Built-in
/// scalar types are never entered in the table; callers check for them
/// with [`is_builtin_scalar`](crate::schema::is_builtin_scalar) before
/// looking a name up.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) types: IndexMap<String, SchemaType>,
    pub(crate) query_type_name: String,
    pub(crate) mutation_type_name: Option<String>,
}
impl Schema {
    /// Parses `schema_src` with `graphql_parser` and indexes the result.
    pub fn parse(schema_src: &str) -> Result<Self, GenerateError> {
        let doc = ast::schema::parse(schema_src)
            .map_err(GenerateError::SchemaParse)?;
        Self::from_document(&doc)
    }

    /// Indexes an already-parsed schema document.
    ///
    /// Type extensions and directive definitions carry no information the
    /// generator consumes and are skipped. A type name defined twice is
    /// an input defect.
    pub fn from_document(
        doc: &ast::schema::Document,
    ) -> Result<Self, GenerateError> {
        let mut types: IndexMap<String, SchemaType> = IndexMap::new();
        let mut query_type_name: Option<String> = None;
        let mut mutation_type_name: Option<String> = None;

        for def in &doc.definitions {
            match def {
                ast::schema::Definition::TypeDefinition(type_def) => {
                    let schema_type = Self::index_type_definition(type_def);
                    if types.contains_key(schema_type.name()) {
                        return Err(GenerateError::DuplicateTypeDefinition {
                            type_name: schema_type.name.clone(),
                        });
                    }
                    types.insert(schema_type.name.clone(), schema_type);
                },

                ast::schema::Definition::SchemaDefinition(schema_def) => {
                    query_type_name = schema_def.query.clone();
                    mutation_type_name = schema_def.mutation.clone();
                },

                ast::schema::Definition::TypeExtension(_)
                    | ast::schema::Definition::DirectiveDefinition(_) => (),
            }
        }

        // Per the GraphQL spec, root operation types default to object
        // types named `Query`/`Mutation` unless a `schema { ... }` block
        // overrides them.
        let query_type_name =
            query_type_name.unwrap_or_else(|| "Query".to_string());
        let mutation_type_name = mutation_type_name.or_else(|| {
            types.contains_key("Mutation").then(|| "Mutation".to_string())
        });

        Ok(Self {
            types,
            query_type_name,
            mutation_type_name,
        })
    }

    pub fn type_named(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// All named types, keyed by name, in schema-document order.
    pub fn all_types(&self) -> &IndexMap<String, SchemaType> {
        &self.types
    }

    /// The name of the root type serving `query` operations.
    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    /// The name of the root type serving `mutation` operations, if the
    /// schema defines one.
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// The concrete types that can satisfy a selection on an abstract
    /// type: the implementing object types of an interface (in
    /// schema-document order) or the declared members of a union (in
    /// declaration order). Empty for concrete types.
    pub fn possible_types(&self, abstract_type: &SchemaType) -> Vec<&SchemaType> {
        match abstract_type.kind {
            TypeKind::Interface =>
                self.types.values()
                    .filter(|candidate| {
                        candidate.implements.iter()
                            .any(|iface| iface == &abstract_type.name)
                    })
                    .collect(),

            TypeKind::Union =>
                abstract_type.members.iter()
                    .filter_map(|member| self.types.get(member))
                    .collect(),

            _ => vec![],
        }
    }

    fn index_type_definition(
        type_def: &ast::schema::TypeDefinition,
    ) -> SchemaType {
        match type_def {
            ast::schema::TypeDefinition::Object(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::Object,
                fields: Self::index_fields(&def.fields),
                enum_values: vec![],
                implements: def.implements_interfaces.clone(),
                members: vec![],
            },

            ast::schema::TypeDefinition::Interface(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::Interface,
                fields: Self::index_fields(&def.fields),
                enum_values: vec![],
                implements: vec![],
                members: vec![],
            },

            ast::schema::TypeDefinition::InputObject(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::InputObject,
                fields: def.fields.iter()
                    .map(|input_value| FieldDef {
                        name: input_value.name.clone(),
                        field_type: input_value.value_type.clone(),
                    })
                    .collect(),
                enum_values: vec![],
                implements: vec![],
                members: vec![],
            },

            ast::schema::TypeDefinition::Enum(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::Enum,
                fields: vec![],
                enum_values: def.values.iter()
                    .map(|value| value.name.clone())
                    .collect(),
                implements: vec![],
                members: vec![],
            },

            ast::schema::TypeDefinition::Scalar(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::Scalar,
                fields: vec![],
                enum_values: vec![],
                implements: vec![],
                members: vec![],
            },

            ast::schema::TypeDefinition::Union(def) => SchemaType {
                name: def.name.clone(),
                kind: TypeKind::Union,
                fields: vec![],
                enum_values: vec![],
                implements: vec![],
                members: def.types.clone(),
            },
        }
    }

    fn index_fields(fields: &[ast::schema::Field]) -> Vec<FieldDef> {
        fields.iter()
            .map(|field| FieldDef {
                name: field.name.clone(),
                field_type: field.field_type.clone(),
            })
            .collect()
    }
}

/// Unwraps list and non-null annotations down to the named leaf type.
pub(crate) fn leaf_type_name(annotation: &ast::schema::Type) -> &str {
    match annotation {
        ast::schema::Type::NamedType(name) => name.as_str(),
        ast::schema::Type::ListType(inner)
            | ast::schema::Type::NonNullType(inner) => leaf_type_name(inner),
    }
}
