use crate::ast;
use crate::model::ScalarTarget;
use crate::model::TargetType;
use crate::model::map_type;
use crate::schema::Schema;

const SCHEMA: &str = r#"
type Query {
  people: [[[Person]]]
}

type Person {
  name: String
}

interface Node {
  id: ID!
}

union SearchResult = Person

enum Episode {
  NEWHOPE
}

scalar Date
"#;

fn schema() -> Schema {
    Schema::parse(SCHEMA).expect("schema parses")
}

fn named(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

fn list(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::NonNullType(Box::new(inner))
}

#[test]
fn builtin_scalars_map_to_fixed_primitives() {
    let schema = schema();

    assert_eq!(
        map_type(&schema, &named("String")),
        TargetType::Scalar(ScalarTarget::String),
    );
    assert_eq!(
        map_type(&schema, &named("ID")),
        TargetType::Scalar(ScalarTarget::Id),
    );
    assert_eq!(
        map_type(&schema, &named("Int")),
        TargetType::Scalar(ScalarTarget::Int),
    );
    assert_eq!(
        map_type(&schema, &named("Boolean")),
        TargetType::Scalar(ScalarTarget::Bool),
    );
}

#[test]
fn float_maps_to_a_floating_point_target() {
    assert_eq!(
        map_type(&schema(), &named("Float")),
        TargetType::Scalar(ScalarTarget::Float),
    );
}

#[test]
fn custom_scalars_map_to_their_own_name() {
    assert_eq!(
        map_type(&schema(), &named("Date")),
        TargetType::Named("Date".to_string()),
    );
}

#[test]
fn object_and_enum_types_map_to_their_own_name() {
    let schema = schema();

    assert_eq!(
        map_type(&schema, &named("Person")),
        TargetType::Named("Person".to_string()),
    );
    assert_eq!(
        map_type(&schema, &named("Episode")),
        TargetType::Named("Episode".to_string()),
    );
}

#[test]
fn abstract_types_map_to_their_synthetic_names() {
    let schema = schema();

    assert_eq!(
        map_type(&schema, &named("Node")),
        TargetType::Named("NodeFragment".to_string()),
    );
    assert_eq!(
        map_type(&schema, &named("SearchResult")),
        TargetType::Named("SearchResultUnion".to_string()),
    );
}

#[test]
fn non_null_annotations_are_transparent() {
    let schema = schema();

    assert_eq!(
        map_type(&schema, &non_null(named("Int"))),
        TargetType::Scalar(ScalarTarget::Int),
    );
    assert_eq!(
        map_type(&schema, &non_null(list(non_null(named("Person"))))),
        TargetType::List(Box::new(TargetType::Named("Person".to_string()))),
    );
}

#[test]
fn nested_lists_keep_their_dimensionality() {
    let schema = schema();

    let int_matrix = map_type(&schema, &list(list(named("Int"))));
    assert_eq!(int_matrix.list_depth(), 2);
    assert_eq!(int_matrix.leaf(), &TargetType::Scalar(ScalarTarget::Int));

    let person_cube = map_type(&schema, &list(list(list(named("Person")))));
    assert_eq!(person_cube.list_depth(), 3);
    assert_eq!(
        person_cube.leaf(),
        &TargetType::Named("Person".to_string()),
    );
}

#[test]
fn list_elements_get_the_synthetic_suffix_at_any_depth() {
    let schema = schema();

    assert_eq!(
        map_type(&schema, &list(named("Node"))),
        TargetType::List(Box::new(
            TargetType::Named("NodeFragment".to_string()),
        )),
    );
    assert_eq!(
        map_type(&schema, &list(list(named("SearchResult")))).leaf(),
        &TargetType::Named("SearchResultUnion".to_string()),
    );
}

#[test]
fn mapping_is_pure() {
    let schema = schema();
    let annotation = list(non_null(named("Node")));

    assert_eq!(
        map_type(&schema, &annotation),
        map_type(&schema, &annotation),
    );
}
