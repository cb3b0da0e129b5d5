use crate::GenerateError;
use crate::ast;
use crate::casing::to_pascal_case;
use crate::casing::to_snake_case;
use crate::closure::TypeClosure;
use crate::document::Operation;
use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::model::CodeModel;
use crate::model::Declaration;
use crate::model::EnumDecl;
use crate::model::GRAPHQL_ERROR_STRUCT_NAME;
use crate::model::OpaqueScalarDecl;
use crate::model::OperationDescriptor;
use crate::model::ScalarTarget;
use crate::model::StructDecl;
use crate::model::StructField;
use crate::model::TargetType;
use crate::model::VariableParam;
use crate::model::graphql_error_decls;
use crate::model::map_type;
use crate::model::type_mapper::FRAGMENT_SUFFIX;
use crate::model::type_mapper::UNION_SUFFIX;
use crate::schema::FieldDef;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

/// Turns a resolved [`TypeClosure`] plus the schema and operations into a
/// [`CodeModel`].
///
/// Closure entries are processed in sorted-name order and operations in
/// document order, so the model (and therefore the emitted file) is
/// byte-identical across runs on unchanged inputs.
pub struct CodeModelBuilder<'a> {
    schema: &'a Schema,
    document: &'a QueryDocument,
    closure: &'a TypeClosure,
    use_options: bool,
}
impl<'a> CodeModelBuilder<'a> {
    pub fn new(
        schema: &'a Schema,
        document: &'a QueryDocument,
        closure: &'a TypeClosure,
        use_options: bool,
    ) -> Self {
        Self {
            schema,
            document,
            closure,
            use_options,
        }
    }

    pub fn build(self) -> Result<CodeModel> {
        let mut declarations: Vec<Declaration> = vec![];
        for type_name in self.closure.sorted_type_names() {
            let schema_type = self.schema
                .type_named(type_name)
                .ok_or_else(|| GenerateError::ClosureTypeMissingFromSchema {
                    type_name: type_name.to_string(),
                })?;
            declarations.push(self.build_declaration(schema_type));
        }

        let mut operations: Vec<OperationDescriptor> = vec![];
        let mut envelopes: Vec<StructDecl> = vec![];
        for operation in self.document.operations() {
            let descriptor = self.build_operation_descriptor(&operation)?;
            let (response, data) = Self::build_envelopes(&descriptor);
            envelopes.push(response);
            envelopes.push(data);
            operations.push(descriptor);
        }

        let mut model = CodeModel {
            declarations,
            operations,
            envelopes,
            error_decls: graphql_error_decls(),
        };
        if self.use_options {
            model.set_field_optionality(true);
        }
        Ok(model)
    }

    fn build_declaration(&self, schema_type: &SchemaType) -> Declaration {
        match schema_type.kind() {
            TypeKind::Object | TypeKind::InputObject =>
                Declaration::Struct(self.build_struct(schema_type)),

            TypeKind::Enum => Declaration::Enum(EnumDecl {
                name: schema_type.name().to_string(),
                values: schema_type.enum_values().to_vec(),
            }),

            TypeKind::Scalar => Declaration::OpaqueScalar(OpaqueScalarDecl {
                name: schema_type.name().to_string(),
            }),

            TypeKind::Interface => Declaration::Struct(
                self.build_merged_struct(schema_type, FRAGMENT_SUFFIX),
            ),

            TypeKind::Union => Declaration::Struct(
                self.build_merged_struct(schema_type, UNION_SUFFIX),
            ),
        }
    }

    /// A struct for a concrete type: the schema type's own declared
    /// fields, in declaration order, filtered to the closure's selected
    /// set.
    fn build_struct(&self, schema_type: &SchemaType) -> StructDecl {
        StructDecl {
            name: schema_type.name().to_string(),
            fields: self.build_struct_fields(
                schema_type.fields(),
                schema_type.name(),
            ),
        }
    }

    /// The synthetic struct for an abstract type: the union of the
    /// type's own declared fields and every possible concrete type's
    /// fields, de-duplicated first-occurrence-wins, filtered to the
    /// closure's selected set for the underlying type name.
    fn build_merged_struct(
        &self,
        schema_type: &SchemaType,
        suffix: &str,
    ) -> StructDecl {
        let mut candidates: Vec<&FieldDef> = vec![];
        candidates.extend(schema_type.fields());
        for possible_type in self.schema.possible_types(schema_type) {
            candidates.extend(possible_type.fields());
        }

        let mut merged: IndexMap<&str, &FieldDef> = IndexMap::new();
        for field_def in candidates {
            merged.entry(field_def.name()).or_insert(field_def);
        }

        let selected = self.closure.selected_fields(schema_type.name());
        let fields = merged.values()
            .filter(|field_def| {
                selected.is_some_and(|set| set.contains(field_def.name()))
            })
            .map(|field_def| self.build_struct_field(field_def))
            .collect();

        StructDecl {
            name: format!("{}{suffix}", schema_type.name()),
            fields,
        }
    }

    fn build_struct_fields(
        &self,
        field_defs: &[FieldDef],
        owner_type_name: &str,
    ) -> Vec<StructField> {
        let selected = self.closure.selected_fields(owner_type_name);
        field_defs.iter()
            .filter(|field_def| {
                selected.is_some_and(|set| set.contains(field_def.name()))
            })
            .map(|field_def| self.build_struct_field(field_def))
            .collect()
    }

    fn build_struct_field(&self, field_def: &FieldDef) -> StructField {
        StructField {
            name: to_snake_case(field_def.name()),
            serialization_key: field_def.name().to_string(),
            target_type: map_type(self.schema, field_def.field_type()),
            optional: false,
        }
    }

    fn build_operation_descriptor(
        &self,
        operation: &Operation<'_>,
    ) -> Result<OperationDescriptor> {
        let variables = operation.variable_definitions().iter()
            .map(|var_def| VariableParam {
                name: var_def.name.clone(),
                target_type: map_type(self.schema, &var_def.var_type),
            })
            .collect();

        let root_type_name = match operation.kind() {
            OperationKind::Query => self.schema.query_type_name().to_string(),
            OperationKind::Mutation => self.schema
                .mutation_type_name()
                .ok_or_else(|| GenerateError::UndefinedType {
                    type_name: "Mutation".to_string(),
                })?
                .to_string(),
        };

        let mut result_fields: IndexMap<String, StructField> = IndexMap::new();
        self.collect_root_fields(
            &root_type_name,
            operation.selection_set(),
            &mut result_fields,
            &mut vec![],
        )?;

        Ok(OperationDescriptor {
            name: operation.name().to_string(),
            kind: operation.kind(),
            variables,
            result_fields: result_fields.into_values().collect(),
            source: operation.source().to_string(),
        })
    }

    /// Collects one typed entry per top-level selected field (alias as
    /// the field name), expanding fragments in place. First occurrence
    /// of an alias wins.
    fn collect_root_fields(
        &self,
        enclosing_type_name: &str,
        set: &ast::query::SelectionSet,
        out: &mut IndexMap<String, StructField>,
        visited_fragments: &mut Vec<String>,
    ) -> Result<()> {
        let fragments = self.document.fragments();
        for selection in &set.items {
            match selection {
                ast::query::Selection::Field(field) => {
                    let response_key =
                        field.alias.as_ref().unwrap_or(&field.name);
                    if out.contains_key(response_key) {
                        continue;
                    }
                    let target_type = if field.name.starts_with("__") {
                        // Only `__typename` is meaningful on a generated
                        // client; it decodes as a plain string.
                        TargetType::Scalar(ScalarTarget::String)
                    } else {
                        let enclosing_type = self.schema
                            .type_named(enclosing_type_name)
                            .ok_or_else(|| GenerateError::UndefinedType {
                                type_name: enclosing_type_name.to_string(),
                            })?;
                        let field_def = enclosing_type
                            .field(&field.name)
                            .ok_or_else(|| GenerateError::UndefinedField {
                                type_name: enclosing_type_name.to_string(),
                                field_name: field.name.clone(),
                            })?;
                        map_type(self.schema, field_def.field_type())
                    };
                    out.insert(response_key.clone(), StructField {
                        name: to_snake_case(response_key),
                        serialization_key: response_key.clone(),
                        target_type,
                        optional: false,
                    });
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment = fragments
                        .get(spread.fragment_name.as_str())
                        .copied()
                        .ok_or_else(|| GenerateError::UndefinedFragment {
                            fragment_name: spread.fragment_name.clone(),
                        })?;
                    if visited_fragments.contains(&fragment.name) {
                        continue;
                    }
                    visited_fragments.push(fragment.name.clone());
                    let ast::query::TypeCondition::On(on_type) =
                        &fragment.type_condition;
                    self.collect_root_fields(
                        on_type,
                        &fragment.selection_set,
                        out,
                        visited_fragments,
                    )?;
                    visited_fragments.pop();
                },

                ast::query::Selection::InlineFragment(inline) => {
                    let on_type = match &inline.type_condition {
                        Some(ast::query::TypeCondition::On(name)) =>
                            name.as_str(),
                        None => enclosing_type_name,
                    };
                    self.collect_root_fields(
                        on_type,
                        &inline.selection_set,
                        out,
                        visited_fragments,
                    )?;
                },
            }
        }
        Ok(())
    }

    /// The standard GraphQL-over-HTTP envelope pair for one operation.
    fn build_envelopes(
        descriptor: &OperationDescriptor,
    ) -> (StructDecl, StructDecl) {
        let pascal_name = to_pascal_case(&descriptor.name);
        let data_name = format!("{pascal_name}Data");

        let response = StructDecl {
            name: format!("{pascal_name}Response"),
            fields: vec![
                StructField {
                    name: "data".to_string(),
                    serialization_key: "data".to_string(),
                    target_type: TargetType::Named(data_name.clone()),
                    optional: false,
                },
                StructField {
                    name: "errors".to_string(),
                    serialization_key: "errors".to_string(),
                    target_type: TargetType::List(Box::new(
                        TargetType::Named(GRAPHQL_ERROR_STRUCT_NAME.to_string()),
                    )),
                    optional: false,
                },
            ],
        };
        let data = StructDecl {
            name: data_name,
            fields: descriptor.result_fields.clone(),
        };
        (response, data)
    }
}
