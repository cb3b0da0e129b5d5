use crate::schema::is_builtin_scalar;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// The minimal mapping of schema type name -> set of field names selected
/// from that type anywhere in a query document.
///
/// Registration is an idempotent union-merge: registering a type that is
/// already present only adds field names not yet recorded, and a type is
/// never removed. Built-in scalar names are never entered. This is what
/// makes traversal of cyclic schemas terminate -- re-visiting a type can
/// only grow its entry, and structural expansion is guarded separately by
/// the resolver.
///
/// One closure is built per generation run, then consumed read-only by
/// the code model builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeClosure {
    types: IndexMap<String, IndexSet<String>>,
}
impl TypeClosure {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records that `field_names` are selected from `type_name`, merging
    /// with any fields recorded earlier. Built-in scalar names are
    /// ignored.
    pub(crate) fn register(
        &mut self,
        type_name: &str,
        field_names: impl IntoIterator<Item = String>,
    ) {
        if is_builtin_scalar(type_name) {
            return;
        }
        self.types
            .entry(type_name.to_string())
            .or_default()
            .extend(field_names);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The field names selected from `type_name`, in first-selected
    /// order. `None` if the type is not part of the closure.
    pub fn selected_fields(&self, type_name: &str) -> Option<&IndexSet<String>> {
        self.types.get(type_name)
    }

    /// All registered type names, sorted lexicographically. Consumers
    /// iterate in this order so output is stable across runs.
    pub fn sorted_type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
