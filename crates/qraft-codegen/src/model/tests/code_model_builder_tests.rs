use crate::GenerateError;
use crate::closure::ClosureResolver;
use crate::closure::TypeClosure;
use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::model::CodeModel;
use crate::model::CodeModelBuilder;
use crate::model::Declaration;
use crate::model::ScalarTarget;
use crate::model::StructDecl;
use crate::model::TargetType;
use crate::schema::Schema;

const SCHEMA: &str = r#"
type Query {
  hero(episode: Episode): Character
  search(text: String): [SearchResult!]
  movie(title: String!): Movie
  currentEpisode: Episode
}

type Mutation {
  createReview(review: ReviewInput!): Review
}

interface Character {
  id: ID!
  name: String!
}

type Human implements Character {
  id: ID!
  name: String!
  homePlanet: String
}

type Droid implements Character {
  id: ID!
  name: String!
  primaryFunction: String
}

union SearchResult = Human | Droid

enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

scalar Date

type Movie {
  title: String!
  releaseDate: Date
  boxOffice: Float
  actors: [Actor!]
}

type Actor {
  name: String!
}

type Review {
  stars: Int!
  commentary: String
}

input ReviewInput {
  stars: Int!
  commentary: String
}
"#;

fn build(query_src: &str, use_options: bool) -> CodeModel {
    let schema = Schema::parse(SCHEMA).expect("schema parses");
    let document = QueryDocument::parse(query_src).expect("query parses");
    let closure = ClosureResolver::new(&schema, &document)
        .resolve()
        .expect("closure resolves");
    CodeModelBuilder::new(&schema, &document, &closure, use_options)
        .build()
        .expect("model builds")
}

fn struct_named<'model>(model: &'model CodeModel, name: &str) -> &'model StructDecl {
    model.declarations().iter()
        .find_map(|declaration| match declaration {
            Declaration::Struct(decl) if decl.name() == name => Some(decl),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no struct declaration named `{name}`"))
}

#[test]
fn declarations_are_sorted_by_closure_key() {
    let model = build(r#"
        query getSaga {
          movie(title: "Alien") {
            title
            actors {
              name
            }
          }
          hero {
            name
          }
        }
    "#, false);

    let names: Vec<&str> = model.declarations().iter()
        .map(|declaration| declaration.name())
        .collect();
    // Sorted by schema type name; the interface's declaration carries
    // the synthetic suffix.
    assert_eq!(names, vec!["Actor", "CharacterFragment", "Movie"]);
}

#[test]
fn struct_fields_follow_schema_order_filtered_to_selection() {
    let model = build(r#"
        query getMovie {
          movie(title: "Alien") {
            actors {
              name
            }
            title
          }
        }
    "#, false);

    let movie = struct_named(&model, "Movie");
    let field_names: Vec<&str> =
        movie.fields().iter().map(|field| field.name()).collect();
    // Schema declaration order, not selection order; unselected fields
    // (releaseDate, boxOffice) are absent.
    assert_eq!(field_names, vec!["title", "actors"]);
}

#[test]
fn field_names_are_snake_cased_with_preserved_serialization_keys() {
    let model = build(r#"
        query getMovie {
          movie(title: "Alien") {
            boxOffice
          }
        }
    "#, false);

    let movie = struct_named(&model, "Movie");
    let field = &movie.fields()[0];
    assert_eq!(field.name(), "box_office");
    assert_eq!(field.serialization_key(), "boxOffice");
    assert_eq!(field.target_type(), &TargetType::Scalar(ScalarTarget::Float));
}

#[test]
fn enums_always_carry_every_declared_value() {
    let model = build("query getCurrent { currentEpisode }", false);

    let episode = model.declarations().iter()
        .find_map(|declaration| match declaration {
            Declaration::Enum(decl) => Some(decl),
            _ => None,
        })
        .expect("enum declaration exists");
    assert_eq!(episode.name(), "Episode");
    assert_eq!(episode.values(), ["NEWHOPE", "EMPIRE", "JEDI"]);
}

#[test]
fn custom_scalars_become_opaque_declarations() {
    let model = build(r#"
        query getMovie {
          movie(title: "Alien") {
            releaseDate
          }
        }
    "#, false);

    assert!(model.declarations().iter().any(|declaration| matches!(
        declaration,
        Declaration::OpaqueScalar(decl) if decl.name() == "Date",
    )));
}

#[test]
fn interface_merge_unions_branch_fields_in_schema_order() {
    let model = build(r#"
        query getHero {
          hero {
            ... on Droid {
              primaryFunction
            }
            ... on Human {
              homePlanet
            }
            ... on Character {
              name
            }
          }
        }
    "#, false);

    let merged = struct_named(&model, "CharacterFragment");
    let field_names: Vec<&str> =
        merged.fields().iter().map(|field| field.name()).collect();
    // Interface-declared fields first, then implementations in schema
    // order -- independent of branch order in the query. `id` was never
    // selected and is absent.
    assert_eq!(field_names, vec!["name", "home_planet", "primary_function"]);
}

#[test]
fn union_merge_gets_the_union_suffix() {
    let model = build(r#"
        query findAnything {
          search(text: "r2") {
            ... on Human {
              name
            }
            ... on Droid {
              primaryFunction
            }
          }
        }
    "#, false);

    let merged = struct_named(&model, "SearchResultUnion");
    let field_names: Vec<&str> =
        merged.fields().iter().map(|field| field.name()).collect();
    assert_eq!(field_names, vec!["name", "primary_function"]);
}

#[test]
fn operation_descriptors_keep_document_order_and_typing() {
    let model = build(r#"
        query getHero($episode: Episode) {
          hero(episode: $episode) {
            name
          }
        }

        mutation createReview($review: ReviewInput!) {
          createReview(review: $review) {
            stars
          }
        }
    "#, false);

    let operations = model.operations();
    assert_eq!(operations.len(), 2);

    let get_hero = &operations[0];
    assert_eq!(get_hero.name(), "getHero");
    assert_eq!(get_hero.kind(), OperationKind::Query);
    assert_eq!(get_hero.variables().len(), 1);
    assert_eq!(get_hero.variables()[0].name(), "episode");
    assert_eq!(
        get_hero.variables()[0].target_type(),
        &TargetType::Named("Episode".to_string()),
    );
    assert!(get_hero.source().contains("query getHero"));

    let create_review = &operations[1];
    assert_eq!(create_review.kind(), OperationKind::Mutation);
    assert_eq!(
        create_review.variables()[0].target_type(),
        &TargetType::Named("ReviewInput".to_string()),
    );
}

#[test]
fn result_fields_use_aliases_and_reference_declarations() {
    let model = build(r#"
        query getMovie {
          alien: movie(title: "Alien") {
            title
          }
        }
    "#, false);

    let fields = model.operations()[0].result_fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "alien");
    assert_eq!(fields[0].serialization_key(), "alien");
    assert_eq!(
        fields[0].target_type(),
        &TargetType::Named("Movie".to_string()),
    );
}

#[test]
fn every_operation_gets_one_envelope_pair() {
    let model = build(r#"
        query getHero {
          hero {
            name
          }
        }

        query getCurrent {
          currentEpisode
        }
    "#, false);

    let envelope_names: Vec<&str> =
        model.envelopes().iter().map(|decl| decl.name()).collect();
    assert_eq!(envelope_names, vec![
        "GetHeroResponse",
        "GetHeroData",
        "GetCurrentResponse",
        "GetCurrentData",
    ]);

    let response = &model.envelopes()[0];
    assert_eq!(response.fields()[0].name(), "data");
    assert_eq!(
        response.fields()[0].target_type(),
        &TargetType::Named("GetHeroData".to_string()),
    );
    assert_eq!(response.fields()[1].name(), "errors");
    assert_eq!(
        response.fields()[1].target_type(),
        &TargetType::List(Box::new(
            TargetType::Named("GraphQLError".to_string()),
        )),
    );
}

#[test]
fn graphql_error_shapes_appear_exactly_once() {
    let model = build(r#"
        query getHero {
          hero {
            name
          }
        }

        query getCurrent {
          currentEpisode
        }
    "#, false);

    let error_names: Vec<&str> =
        model.error_decls().iter().map(|decl| decl.name()).collect();
    assert_eq!(error_names, vec![
        "GraphQLError",
        "GraphQLErrorLocation",
        "GraphQLErrorExtensions",
    ]);
}

#[test]
fn options_mode_wraps_non_list_fields_only() {
    let model = build(r#"
        query getMovie {
          movie(title: "Alien") {
            title
            actors {
              name
            }
          }
        }
    "#, true);

    let movie = struct_named(&model, "Movie");
    let title = &movie.fields()[0];
    let actors = &movie.fields()[1];
    assert!(title.is_optional());
    assert!(!actors.is_optional());

    // The envelope's `data` is wrapped; its `errors` list is not.
    let response = &model.envelopes()[0];
    assert!(response.fields()[0].is_optional());
    assert!(!response.fields()[1].is_optional());

    // The error family follows the same rule.
    let error = &model.error_decls()[0];
    assert!(error.fields().iter().any(|field| {
        field.name() == "extensions" && field.is_optional()
    }));
    assert!(error.fields().iter().any(|field| {
        field.name() == "locations" && !field.is_optional()
    }));
}

#[test]
fn options_mode_is_a_reversible_post_pass() {
    let query = r#"
        query getMovie {
          movie(title: "Alien") {
            title
            releaseDate
            actors {
              name
            }
          }
        }
    "#;

    let base = build(query, false);
    let mut wrapped = build(query, true);
    assert_ne!(base, wrapped);

    wrapped.set_field_optionality(false);
    assert_eq!(base, wrapped);
}

#[test]
fn building_is_deterministic() {
    let query = r#"
        query getHero {
          hero {
            name
            ... on Human {
              homePlanet
            }
          }
        }
    "#;

    assert_eq!(build(query, false), build(query, false));
}

#[test]
fn closure_key_missing_from_schema_is_fatal() {
    let schema = Schema::parse(SCHEMA).expect("schema parses");
    let document = QueryDocument::parse("query getHero { hero { name } }")
        .expect("query parses");

    let mut closure = TypeClosure::new();
    closure.register("Ghost", []);

    let result = CodeModelBuilder::new(&schema, &document, &closure, false)
        .build();
    assert!(matches!(
        result,
        Err(GenerateError::ClosureTypeMissingFromSchema { type_name })
            if type_name == "Ghost",
    ));
}
