use crate::model::Declaration;
use crate::model::OperationDescriptor;
use crate::model::StructDecl;
use crate::model::TargetType;

/// The language-agnostic output of a generation run: every type
/// declaration the operations need, one descriptor per operation, the
/// per-operation response envelopes, and the fixed GraphQL error shapes.
/// Pure data -- formatting is entirely the emitter's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeModel {
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) operations: Vec<OperationDescriptor>,
    pub(crate) envelopes: Vec<StructDecl>,
    pub(crate) error_decls: Vec<StructDecl>,
}
impl CodeModel {
    /// Type declarations derived from the closure, in sorted-name order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Operation descriptors, in document order.
    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }

    /// The `<Op>Response`/`<Op>Data` envelope pairs, in document order.
    pub fn envelopes(&self) -> &[StructDecl] {
        &self.envelopes
    }

    /// The fixed `GraphQLError` declaration set, present exactly once
    /// per run.
    pub fn error_decls(&self) -> &[StructDecl] {
        &self.error_decls
    }

    /// Sets the optional flag on every non-list field of every struct in
    /// the model, including envelope and error structs. List fields are
    /// never touched -- they are already inherently nullable containers.
    ///
    /// This is a pure post-pass: applying it with `optional = true` and
    /// then `optional = false` reproduces the original model exactly.
    pub(crate) fn set_field_optionality(&mut self, optional: bool) {
        for declaration in &mut self.declarations {
            if let Declaration::Struct(decl) = declaration {
                Self::set_struct_optionality(decl, optional);
            }
        }
        for decl in &mut self.envelopes {
            Self::set_struct_optionality(decl, optional);
        }
        for decl in &mut self.error_decls {
            Self::set_struct_optionality(decl, optional);
        }
    }

    fn set_struct_optionality(decl: &mut StructDecl, optional: bool) {
        for field in &mut decl.fields {
            if !matches!(field.target_type, TargetType::List(_)) {
                field.optional = optional;
            }
        }
    }
}
