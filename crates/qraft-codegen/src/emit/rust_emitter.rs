use crate::casing::to_pascal_case;
use crate::casing::to_screaming_snake_case;
use crate::casing::to_snake_case;
use crate::model::CodeModel;
use crate::model::Declaration;
use crate::model::EnumDecl;
use crate::model::OpaqueScalarDecl;
use crate::model::OperationDescriptor;
use crate::model::ScalarTarget;
use crate::model::StructDecl;
use crate::model::StructField;
use crate::model::TargetType;
use std::fmt::Write;

/// Default header comment prepended to every generated module.
const HEADER: &str = "// Generated with qraftgen. DO NOT EDIT.";

/// Renders a [`CodeModel`] as one formatted Rust module.
///
/// Output section order is fixed: header, module attributes, imports,
/// type declarations, operation source constants, client trait,
/// implementation struct + constructor, trait implementation, response
/// envelopes, error structs. The model is already deterministic, so the
/// emitted text is byte-identical across runs on unchanged inputs.
pub struct RustEmitter {
    client_name: String,
}
impl RustEmitter {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }

    pub fn emit(&self, model: &CodeModel) -> String {
        let mut out = String::new();

        out.push_str(HEADER);
        out.push_str("\n\n");
        out.push_str("#![allow(dead_code)]\n");
        out.push_str("#![allow(unused_imports)]\n");
        out.push_str("#![allow(async_fn_in_trait)]\n");
        out.push_str("#![allow(clippy::all)]\n\n");
        out.push_str("use serde::Deserialize;\n");
        out.push_str("use serde::Serialize;\n");

        for declaration in model.declarations() {
            out.push('\n');
            match declaration {
                Declaration::Struct(decl) => Self::write_struct(&mut out, decl),
                Declaration::Enum(decl) => Self::write_enum(&mut out, decl),
                Declaration::OpaqueScalar(decl) =>
                    Self::write_opaque_scalar(&mut out, decl),
            }
        }

        for operation in model.operations() {
            out.push('\n');
            Self::write_operation_const(&mut out, operation);
        }

        out.push('\n');
        self.write_client_trait(&mut out, model.operations());
        out.push('\n');
        self.write_client_struct(&mut out);
        out.push('\n');
        self.write_client_impl(&mut out, model.operations());

        for envelope in model.envelopes() {
            out.push('\n');
            Self::write_struct(&mut out, envelope);
        }

        for error_decl in model.error_decls() {
            out.push('\n');
            Self::write_struct(&mut out, error_decl);
        }

        out
    }

    fn write_struct(out: &mut String, decl: &StructDecl) {
        let _ = writeln!(
            out,
            "#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]",
        );
        let _ = writeln!(out, "pub struct {} {{", decl.name());
        for field in decl.fields() {
            Self::write_struct_field(out, field);
        }
        out.push_str("}\n");
    }

    fn write_struct_field(out: &mut String, field: &StructField) {
        let ident = rust_ident(field.name());
        let needs_rename = ident_spelling(&ident) != field.serialization_key();
        let needs_default = field.is_optional() || field.target_type().is_list();

        match (needs_default, needs_rename) {
            (true, true) => {
                let _ = writeln!(
                    out,
                    "    #[serde(default, rename = \"{}\")]",
                    field.serialization_key(),
                );
            },
            (true, false) => {
                let _ = writeln!(out, "    #[serde(default)]");
            },
            (false, true) => {
                let _ = writeln!(
                    out,
                    "    #[serde(rename = \"{}\")]",
                    field.serialization_key(),
                );
            },
            (false, false) => (),
        }
        let _ = writeln!(out, "    pub {ident}: {},", field_type(field));
    }

    fn write_enum(out: &mut String, decl: &EnumDecl) {
        let _ = writeln!(
            out,
            "#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]",
        );
        let _ = writeln!(out, "pub enum {} {{", decl.name());
        for value in decl.values() {
            let variant = to_pascal_case(value);
            if &variant != value {
                let _ = writeln!(out, "    #[serde(rename = \"{value}\")]");
            }
            let _ = writeln!(out, "    {variant},");
        }
        out.push_str("}\n");
    }

    fn write_opaque_scalar(out: &mut String, decl: &OpaqueScalarDecl) {
        let _ = writeln!(
            out,
            "/// Custom scalar with no fixed shape.\npub type {} = serde_json::Value;",
            decl.name(),
        );
    }

    fn write_operation_const(out: &mut String, operation: &OperationDescriptor) {
        let _ = writeln!(
            out,
            "pub const {}: &str = {};",
            to_screaming_snake_case(operation.name()),
            raw_string_literal(operation.source()),
        );
    }

    fn write_client_trait(&self, out: &mut String, operations: &[OperationDescriptor]) {
        let _ = writeln!(out, "pub trait {} {{", self.client_name);
        for (idx, operation) in operations.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            Self::write_method_signature(out, operation);
            out.push_str(";\n");
        }
        out.push_str("}\n");
    }

    fn write_client_struct(&self, out: &mut String) {
        let _ = writeln!(out, "pub struct {}Impl {{", self.client_name);
        out.push_str("    ctrl: qraft::Client,\n");
        out.push_str("}\n\n");
        let _ = writeln!(out, "impl {}Impl {{", self.client_name);
        out.push_str(
            "    pub fn new(endpoint: impl Into<String>, http_client: reqwest::Client) -> Self {\n",
        );
        out.push_str("        Self {\n");
        out.push_str("            ctrl: qraft::Client::new(endpoint, http_client),\n");
        out.push_str("        }\n");
        out.push_str("    }\n");
        out.push_str("}\n");
    }

    fn write_client_impl(&self, out: &mut String, operations: &[OperationDescriptor]) {
        let _ = writeln!(
            out,
            "impl {} for {}Impl {{",
            self.client_name,
            self.client_name,
        );
        for (idx, operation) in operations.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            Self::write_method_signature(out, operation);
            out.push_str(" {\n");
            Self::write_method_body(out, operation);
            out.push_str("    }\n");
        }
        out.push_str("}\n");
    }

    fn write_method_signature(out: &mut String, operation: &OperationDescriptor) {
        let _ = writeln!(
            out,
            "    async fn {}(",
            to_snake_case(operation.name()),
        );
        out.push_str("        &self,\n");
        for variable in operation.variables() {
            let _ = writeln!(
                out,
                "        {}: {},",
                rust_ident(&to_snake_case(variable.name())),
                rust_type(variable.target_type()),
            );
        }
        out.push_str("        headers: Option<reqwest::header::HeaderMap>,\n");
        out.push_str(
            "    ) -> Result<reqwest::Response, qraft::GraphQLCallError>",
        );
    }

    fn write_method_body(out: &mut String, operation: &OperationDescriptor) {
        if operation.variables().is_empty() {
            out.push_str("        let variables = serde_json::Map::new();\n");
        } else {
            out.push_str("        let mut variables = serde_json::Map::new();\n");
            for variable in operation.variables() {
                let _ = writeln!(
                    out,
                    "        variables.insert(\n            \"{}\".to_string(),\n            \
                     serde_json::to_value(&{}).unwrap_or(serde_json::Value::Null),\n        );",
                    variable.name(),
                    rust_ident(&to_snake_case(variable.name())),
                );
            }
        }
        let _ = writeln!(
            out,
            "        self.ctrl.execute({}, variables, headers).await",
            to_screaming_snake_case(operation.name()),
        );
    }
}

fn rust_type(target: &TargetType) -> String {
    match target {
        TargetType::Scalar(ScalarTarget::Bool) => "bool".to_string(),
        TargetType::Scalar(ScalarTarget::Float) => "f64".to_string(),
        TargetType::Scalar(ScalarTarget::Id) => "String".to_string(),
        TargetType::Scalar(ScalarTarget::Int) => "i64".to_string(),
        TargetType::Scalar(ScalarTarget::String) => "String".to_string(),
        TargetType::Named(name) => name.clone(),
        TargetType::List(inner) => format!("Vec<{}>", rust_type(inner)),
    }
}

fn field_type(field: &StructField) -> String {
    let base = rust_type(field.target_type());
    if field.is_optional() {
        format!("Option<{base}>")
    } else {
        base
    }
}

/// Escapes Rust keywords with a raw-identifier prefix. The few keywords
/// that cannot be raw identifiers get a trailing underscore instead.
fn rust_ident(name: &str) -> String {
    const KEYWORDS: [&str; 48] = [
        "abstract", "as", "async", "await", "become", "box", "break",
        "const", "continue", "do", "dyn", "else", "enum", "extern",
        "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
        "loop", "macro", "match", "mod", "move", "mut", "override",
        "priv", "pub", "ref", "return", "static", "struct", "trait",
        "true", "try", "type", "typeof", "unsafe", "unsized", "use",
        "virtual", "where", "while", "yield",
    ];
    const NON_RAWABLE: [&str; 4] = ["crate", "self", "super", "Self"];

    if NON_RAWABLE.contains(&name) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// The identifier's spelling without any raw-identifier prefix, for
/// comparing against the serialization key.
fn ident_spelling(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Wraps `src` in a raw string literal, using enough `#`s that the
/// source text cannot terminate the literal early.
fn raw_string_literal(src: &str) -> String {
    let mut hashes = 1;
    while src.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let guard = "#".repeat(hashes);
    format!("r{guard}\"{src}\"{guard}")
}
