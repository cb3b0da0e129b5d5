use crate::model::TargetType;

/// A generated struct: one per selected object/input-object type, per
/// synthetic interface/union merge, per response envelope, and per fixed
/// error shape.
#[derive(Clone, Debug, PartialEq)]
pub struct StructDecl {
    pub(crate) name: String,
    pub(crate) fields: Vec<StructField>,
}
impl StructDecl {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }
}

/// One field of a [`StructDecl`].
#[derive(Clone, Debug, PartialEq)]
pub struct StructField {
    /// The target-language field identifier (snake_case).
    pub(crate) name: String,
    /// The schema-side field name, case preserved; this is the key the
    /// field serializes to/from on the wire.
    pub(crate) serialization_key: String,
    pub(crate) target_type: TargetType,
    /// Set by the options-mode post-pass; never set on list fields.
    pub(crate) optional: bool,
}
impl StructField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn serialization_key(&self) -> &str {
        self.serialization_key.as_str()
    }

    pub fn target_type(&self) -> &TargetType {
        &self.target_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
