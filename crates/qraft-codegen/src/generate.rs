use crate::GenerateError;
use crate::closure::ClosureResolver;
use crate::document::QueryDocument;
use crate::emit::RustEmitter;
use crate::model::CodeModelBuilder;
use crate::schema::Schema;

/// Options for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    /// Name of the generated client trait; the implementation struct is
    /// named `<client_name>Impl`.
    pub client_name: String,

    /// When set, every non-list field of every generated struct is
    /// wrapped in `Option<T>` (including the response envelope's `data`
    /// and the error `extensions` fields).
    pub use_options: bool,
}
impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            client_name: "GraphQLClient".to_string(),
            use_options: false,
        }
    }
}

/// Runs the full pipeline over raw schema and query text and returns the
/// generated Rust module source.
///
/// Parsing is delegated to `graphql_parser`; everything after that is a
/// pure, deterministic transformation -- the same inputs always produce
/// byte-identical output.
pub fn generate(
    schema_src: &str,
    query_src: &str,
    config: &GenerateConfig,
) -> Result<String, GenerateError> {
    let schema = Schema::parse(schema_src)?;
    let document = QueryDocument::parse(query_src)?;
    let closure = ClosureResolver::new(&schema, &document).resolve()?;
    let model = CodeModelBuilder::new(
        &schema,
        &document,
        &closure,
        config.use_options,
    ).build()?;
    Ok(RustEmitter::new(config.client_name.as_str()).emit(&model))
}
