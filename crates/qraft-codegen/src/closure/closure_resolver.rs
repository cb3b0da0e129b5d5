use crate::ast;
use crate::GenerateError;
use crate::closure::TypeClosure;
use crate::document::Operation;
use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::schema::Schema;
use crate::schema::is_builtin_scalar;
use crate::schema::leaf_type_name;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, GenerateError>;

/// Walks every operation of a query document against a schema and
/// produces the document's [`TypeClosure`].
///
/// The resolver owns all traversal state for one run (construct ->
/// `resolve()` -> discard); nothing survives between runs. Traversal is
/// strictly sequential, and the closure contents are independent of
/// selection order.
pub struct ClosureResolver<'a> {
    schema: &'a Schema,
    document: &'a QueryDocument,
    fragments: IndexMap<&'a str, &'a ast::query::FragmentDefinition>,
    closure: TypeClosure,
    /// Guards structural expansion of variable types: a type's own
    /// definition is expanded at most once per run, which is what bounds
    /// recursion on cyclic schemas (e.g. Movie <-> Actor).
    expanded_types: IndexSet<String>,
    /// Guards against re-entrant named-fragment spreads.
    visiting_fragments: IndexSet<String>,
}
impl<'a> ClosureResolver<'a> {
    pub fn new(schema: &'a Schema, document: &'a QueryDocument) -> Self {
        Self {
            schema,
            document,
            fragments: document.fragments(),
            closure: TypeClosure::new(),
            expanded_types: IndexSet::new(),
            visiting_fragments: IndexSet::new(),
        }
    }

    pub fn resolve(mut self) -> Result<TypeClosure> {
        for operation in self.document.operations() {
            self.walk_operation(&operation)?;
        }
        Ok(self.closure)
    }

    fn walk_operation(&mut self, operation: &Operation<'a>) -> Result<()> {
        let root_type_name = match operation.kind() {
            OperationKind::Query => self.schema.query_type_name().to_string(),
            OperationKind::Mutation => self.schema
                .mutation_type_name()
                .ok_or_else(|| GenerateError::UndefinedType {
                    type_name: "Mutation".to_string(),
                })?
                .to_string(),
        };

        // The root type itself never becomes a declaration (the per-op
        // `<Op>Data` envelope plays that role), so the root-level field
        // names are discarded here.
        self.walk_selection_set(&root_type_name, operation.selection_set())?;

        for var_def in operation.variable_definitions() {
            self.expand_variable_type(&var_def.var_type)?;
        }
        Ok(())
    }

    /// Walks one selection set with `enclosing_type_name` as the type the
    /// selections apply to, registering every type reached underneath.
    /// Returns the field names this set contributes to the enclosing
    /// type's entry; the caller decides where to record them.
    fn walk_selection_set(
        &mut self,
        enclosing_type_name: &str,
        set: &'a ast::query::SelectionSet,
    ) -> Result<Vec<String>> {
        let mut fields: Vec<String> = vec![];

        for selection in &set.items {
            match selection {
                ast::query::Selection::Field(field) => {
                    fields.push(field.name.clone());
                    if field.name.starts_with("__") {
                        // Meta fields (__typename) have no schema-side
                        // definition to resolve.
                        continue;
                    }
                    self.walk_field(enclosing_type_name, field)?;
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    let Some(fragment) =
                        self.fragments.get(fragment_name).copied()
                    else {
                        return Err(GenerateError::UndefinedFragment {
                            fragment_name: fragment_name.to_string(),
                        });
                    };
                    if !self.visiting_fragments.insert(fragment_name.to_string()) {
                        continue;
                    }
                    let ast::query::TypeCondition::On(on_type) =
                        &fragment.type_condition;
                    let fragment_fields =
                        self.walk_selection_set(on_type, &fragment.selection_set)?;
                    self.visiting_fragments.shift_remove(fragment_name);

                    self.closure.register(on_type, fragment_fields.clone());
                    fields.extend(fragment_fields);
                },

                ast::query::Selection::InlineFragment(inline) => {
                    let on_type = match &inline.type_condition {
                        Some(ast::query::TypeCondition::On(name)) =>
                            name.as_str(),
                        None => enclosing_type_name,
                    };
                    let fragment_fields =
                        self.walk_selection_set(on_type, &inline.selection_set)?;

                    self.closure.register(on_type, fragment_fields.clone());
                    fields.extend(fragment_fields);
                },
            }
        }

        Ok(fields)
    }

    fn walk_field(
        &mut self,
        enclosing_type_name: &str,
        field: &'a ast::query::Field,
    ) -> Result<()> {
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

        let leaf_name = leaf_type_name(field_def.field_type());
        if is_builtin_scalar(leaf_name) {
            return Ok(());
        }
        if self.schema.type_named(leaf_name).is_none() {
            return Err(GenerateError::UndefinedType {
                type_name: leaf_name.to_string(),
            });
        }

        // Register the result type even with no explicit sub-selection,
        // so enum / custom-scalar / list-of-leaf results still get a
        // declaration.
        let leaf_name = leaf_name.to_string();
        self.closure.register(&leaf_name, []);

        if !field.selection_set.items.is_empty() {
            let child_fields =
                self.walk_selection_set(&leaf_name, &field.selection_set)?;
            self.closure.register(&leaf_name, child_fields);
        }
        Ok(())
    }

    /// Registers the type behind a variable declaration. Non-built-in
    /// variable types are sent wholesale on the wire, so the full
    /// schema-declared field set is registered, recursing through nested
    /// input objects.
    fn expand_variable_type(
        &mut self,
        annotation: &ast::query::Type,
    ) -> Result<()> {
        let leaf_name = leaf_type_name(annotation);
        if is_builtin_scalar(leaf_name) {
            return Ok(());
        }
        let schema_type = self.schema
            .type_named(leaf_name)
            .ok_or_else(|| GenerateError::UndefinedType {
                type_name: leaf_name.to_string(),
            })?;

        if !self.expanded_types.insert(leaf_name.to_string()) {
            return Ok(());
        }

        let field_names: Vec<String> = schema_type.fields().iter()
            .map(|field_def| field_def.name().to_string())
            .collect();
        self.closure.register(leaf_name, field_names);

        for field_def in schema_type.fields() {
            self.expand_variable_type(field_def.field_type())?;
        }
        Ok(())
    }
}
