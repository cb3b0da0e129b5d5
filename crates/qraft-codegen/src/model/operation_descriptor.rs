use crate::document::OperationKind;
use crate::model::StructField;
use crate::model::TargetType;

/// Everything the emitter needs to render one client method: the
/// operation's name, its typed parameters, the typed fields of its root
/// selection set, and the raw source text embedded as the request body.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDescriptor {
    pub(crate) name: String,
    pub(crate) kind: OperationKind,
    pub(crate) variables: Vec<VariableParam>,
    pub(crate) result_fields: Vec<StructField>,
    pub(crate) source: String,
}
impl OperationDescriptor {
    /// The operation name as written in the query document.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Typed parameters, one per declared variable, in declaration
    /// order.
    pub fn variables(&self) -> &[VariableParam] {
        &self.variables
    }

    /// Typed fields of the root selection set; these are also the fields
    /// of the operation's `<Op>Data` envelope.
    pub fn result_fields(&self) -> &[StructField] {
        &self.result_fields
    }

    /// The operation source embedded in the generated client.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }
}

/// One typed operation parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableParam {
    /// The variable name as written in the document (no `$`).
    pub(crate) name: String,
    pub(crate) target_type: TargetType,
}
impl VariableParam {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn target_type(&self) -> &TargetType {
        &self.target_type
    }
}
