use crate::closure::TypeClosure;

#[test]
fn register_unions_field_sets() {
    let mut closure = TypeClosure::new();
    closure.register("Movie", ["title".to_string()]);
    closure.register("Movie", ["title".to_string(), "actors".to_string()]);

    let fields = closure.selected_fields("Movie").unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.contains("title"));
    assert!(fields.contains("actors"));
}

#[test]
fn register_with_no_fields_still_records_the_type() {
    let mut closure = TypeClosure::new();
    closure.register("Episode", []);

    assert!(closure.contains("Episode"));
    assert!(closure.selected_fields("Episode").unwrap().is_empty());
}

#[test]
fn builtin_scalars_are_never_registered() {
    let mut closure = TypeClosure::new();
    for name in ["String", "Int", "Float", "Boolean", "ID"] {
        closure.register(name, []);
    }

    assert!(closure.is_empty());
}

#[test]
fn sorted_type_names_are_lexicographic() {
    let mut closure = TypeClosure::new();
    closure.register("Movie", []);
    closure.register("Actor", []);
    closure.register("Episode", []);

    assert_eq!(closure.sorted_type_names(), vec!["Actor", "Episode", "Movie"]);
}
