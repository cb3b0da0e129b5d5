use crate::ast;
use crate::GenerateError;
use crate::document::Operation;
use crate::document::OperationKind;
use indexmap::IndexMap;

/// A parsed executable document plus the raw source it was parsed from.
///
/// Construction validates the shape the generator depends on: every
/// operation must be named (the name becomes a client method) and must be
/// a query or a mutation. The raw source is kept so each operation's text
/// can be embedded in the generated client as the request body.
#[derive(Clone, Debug)]
pub struct QueryDocument {
    pub(crate) doc: ast::query::Document,
    pub(crate) operation_sources: Vec<String>,
}
impl QueryDocument {
    /// Parses `query_src` with `graphql_parser` and wraps the result.
    pub fn parse(query_src: &str) -> Result<Self, GenerateError> {
        let doc = ast::query::parse(query_src)
            .map_err(GenerateError::QueryParse)?;
        Self::new(doc, query_src)
    }

    /// Wraps an already-parsed document. `query_src` must be the source
    /// text the document was parsed from.
    pub fn new(
        doc: ast::query::Document,
        query_src: &str,
    ) -> Result<Self, GenerateError> {
        let mut op_positions: Vec<ast::Pos> = vec![];
        for def in &doc.definitions {
            let ast::query::Definition::Operation(op_def) = def else {
                continue;
            };
            match op_def {
                ast::query::OperationDefinition::Query(query) => {
                    let position = query.position;
                    if query.name.is_none() {
                        return Err(GenerateError::UnnamedOperation {
                            line: position.line,
                        });
                    }
                    op_positions.push(position);
                },

                ast::query::OperationDefinition::Mutation(mutation) => {
                    let position = mutation.position;
                    if mutation.name.is_none() {
                        return Err(GenerateError::UnnamedOperation {
                            line: position.line,
                        });
                    }
                    op_positions.push(position);
                },

                ast::query::OperationDefinition::Subscription(sub) => {
                    return Err(GenerateError::UnsupportedSubscription {
                        operation_name: sub.name.clone()
                            .unwrap_or_else(|| "(anonymous)".to_string()),
                    });
                },

                ast::query::OperationDefinition::SelectionSet(set) => {
                    return Err(GenerateError::UnnamedOperation {
                        line: set.span.0.line,
                    });
                },
            }
        }

        let operation_sources = slice_operation_sources(query_src, &op_positions);

        Ok(Self {
            doc,
            operation_sources,
        })
    }

    /// The document's operations, in document order.
    pub fn operations(&self) -> Vec<Operation<'_>> {
        let mut operations = vec![];
        for def in &self.doc.definitions {
            let ast::query::Definition::Operation(op_def) = def else {
                continue;
            };
            let source = self.operation_sources
                .get(operations.len())
                .map(String::as_str)
                .unwrap_or("");
            match op_def {
                ast::query::OperationDefinition::Query(query) => {
                    operations.push(Operation {
                        kind: OperationKind::Query,
                        name: query.name.as_deref().unwrap_or(""),
                        variable_definitions: &query.variable_definitions,
                        selection_set: &query.selection_set,
                        source,
                    });
                },

                ast::query::OperationDefinition::Mutation(mutation) => {
                    operations.push(Operation {
                        kind: OperationKind::Mutation,
                        name: mutation.name.as_deref().unwrap_or(""),
                        variable_definitions: &mutation.variable_definitions,
                        selection_set: &mutation.selection_set,
                        source,
                    });
                },

                // Rejected during construction.
                ast::query::OperationDefinition::Subscription(_)
                    | ast::query::OperationDefinition::SelectionSet(_) => (),
            }
        }
        operations
    }

    /// The document's named fragment definitions, keyed by fragment name
    /// in document order.
    pub fn fragments(&self) -> IndexMap<&str, &ast::query::FragmentDefinition> {
        self.doc.definitions.iter()
            .filter_map(|def| match def {
                ast::query::Definition::Fragment(frag) =>
                    Some((frag.name.as_str(), frag)),
                ast::query::Definition::Operation(_) => None,
            })
            .collect()
    }
}

/// Slices the raw document text into one source string per operation:
/// each slice runs from the operation's start position to the next
/// operation's start (or end of input), so fragment definitions written
/// after an operation travel with it. `#`-comment lines are stripped.
fn slice_operation_sources(
    query_src: &str,
    op_positions: &[ast::Pos],
) -> Vec<String> {
    let line_starts = line_start_offsets(query_src);

    let offsets: Vec<usize> = op_positions.iter()
        .map(|pos| byte_offset(query_src, &line_starts, *pos))
        .collect();

    offsets.iter().enumerate()
        .map(|(idx, &start)| {
            let end = offsets.get(idx + 1).copied().unwrap_or(query_src.len());
            strip_comments(&query_src[start..end])
        })
        .collect()
}

fn line_start_offsets(src: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (offset, byte) in src.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(offset + 1);
        }
    }
    starts
}

/// Converts a 1-based line/column parser position to a byte offset.
/// Columns count characters, not bytes.
fn byte_offset(src: &str, line_starts: &[usize], pos: ast::Pos) -> usize {
    let Some(&line_start) = line_starts.get(pos.line.saturating_sub(1)) else {
        return src.len();
    };
    src[line_start..].char_indices()
        .nth(pos.column.saturating_sub(1))
        .map(|(offset, _)| line_start + offset)
        .unwrap_or(src.len())
}

/// Drops everything from `#` to end of line, and drops lines that are
/// left empty, compacting the text that gets embedded in the client.
fn strip_comments(op_src: &str) -> String {
    let mut out = String::with_capacity(op_src.len());
    for line in op_src.lines() {
        let code = line.split('#').next().unwrap_or("");
        if !code.trim().is_empty() {
            out.push_str(code);
            out.push('\n');
        }
    }
    out.trim_end_matches('\n').to_string()
}
