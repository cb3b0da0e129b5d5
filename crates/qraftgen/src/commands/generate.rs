use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use qraft_codegen::GenerateConfig;
use qraft_codegen::casing::to_pascal_case;
use qraft_codegen::casing::to_snake_case;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Path to the GraphQL schema file.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Path to the GraphQL query/mutation document.",
        long,
        short='q',
    )]
    query: PathBuf,

    #[arg(
        help="Output path for the generated Rust module. Defaults to \
             `./<client_name>.rs` (snake_case). A directory path is \
             joined with the default file name.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Name of the generated client trait. Defaults to the query \
             file's stem in PascalCase with a `Client` suffix.",
        long,
    )]
    client_name: Option<String>,

    #[arg(
        help="Wrap every non-list field of the generated structs in \
             `Option<T>`.",
        long,
    )]
    use_options: bool,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        match self.generate() {
            Ok(output_path) => CommandResult::stdout(format_args!(
                "Generated {}",
                output_path.display(),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "Failed to generate client: {err:#}",
            )),
        }
    }
}

impl GenerateCmd {
    fn generate(&self) -> anyhow::Result<PathBuf> {
        let schema_src = std::fs::read_to_string(&self.schema)
            .with_context(|| format!(
                "failed to read GraphQL schema file {:?}",
                self.schema,
            ))?;
        let query_src = std::fs::read_to_string(&self.query)
            .with_context(|| format!(
                "failed to read GraphQL query file {:?}",
                self.query,
            ))?;

        let client_name = self.client_name.clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_client_name(&self.query));
        log::debug!("Generating client `{client_name}`...");

        let config = GenerateConfig {
            client_name: client_name.clone(),
            use_options: self.use_options,
        };
        let generated = qraft_codegen::generate(&schema_src, &query_src, &config)?;

        let output_path = resolve_output_path(self.output.as_deref(), &client_name);
        if let Some(dir) = output_path.parent()
            && !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create folder {dir:?}"))?;
        }
        std::fs::write(&output_path, generated)
            .with_context(|| format!(
                "failed to write generated client to {output_path:?}",
            ))?;

        Ok(output_path)
    }
}

/// The query file's stem, PascalCased, with a `Client` suffix:
/// `rockets.graphql` -> `RocketsClient`.
fn default_client_name(query_path: &Path) -> String {
    let stem = query_path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("{}Client", to_pascal_case(&stem))
}

/// A `.rs` path is used as-is; any other path is treated as a directory
/// and joined with the default file name.
fn resolve_output_path(output: Option<&Path>, client_name: &str) -> PathBuf {
    let default_file_name = format!("{}.rs", to_snake_case(client_name));
    match output {
        None => PathBuf::from(default_file_name),
        Some(path) if path.extension().is_some_and(|ext| ext == "rs") =>
            path.to_path_buf(),
        Some(dir) => dir.join(default_file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_name_defaults_from_query_file_stem() {
        assert_eq!(
            default_client_name(Path::new("./queries/space_rockets.graphql")),
            "SpaceRocketsClient",
        );
    }

    #[test]
    fn output_defaults_to_snake_cased_client_name() {
        assert_eq!(
            resolve_output_path(None, "RocketsClient"),
            PathBuf::from("rockets_client.rs"),
        );
    }

    #[test]
    fn explicit_rs_output_is_kept() {
        assert_eq!(
            resolve_output_path(Some(Path::new("src/api.rs")), "RocketsClient"),
            PathBuf::from("src/api.rs"),
        );
    }

    #[test]
    fn directory_output_gets_default_file_name() {
        assert_eq!(
            resolve_output_path(Some(Path::new("src/generated")), "RocketsClient"),
            PathBuf::from("src/generated/rockets_client.rs"),
        );
    }
}
