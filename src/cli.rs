//! Command line front end: read documents → convert → print declarations.
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use json_decl::{convert, convert_value, ConvertOptions, ConvertResult, Error};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer interfaces / type aliases from JSON samples
#[derive(Parser, Debug)]
#[command(name = "json-decl", version)]
pub struct CommandLineInterface {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    declaration_settings: DeclarationSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// print each result record as JSON ({success, output, error}) instead of bare declarations
    #[arg(long, default_value_t = false)]
    result_json: bool,

    /// more logging on stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat each non-empty line of an input as its own document (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// jq filter applied to each document; every filter output is converted separately
    #[arg(long)]
    jq_expr: Option<String>,

    /// literal paths, quoted glob patterns, or '-' for stdin (stdin if omitted)
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct DeclarationSettings {
    /// name of the top-level declaration
    #[arg(long, default_value = "Root")]
    root_name: String,

    /// emit `type X = { .. };` instead of `interface X { .. }`
    #[arg(long, default_value_t = false)]
    type_alias: bool,

    /// mark every property optional (`key?: T`)
    #[arg(long, default_value_t = false)]
    optional: bool,

    /// prefix every declaration with `export`
    #[arg(long, default_value_t = false)]
    export: bool,

    /// JSON file holding a full options record (rootName, useInterface, optionalProperties, addExport)
    #[arg(long, conflicts_with_all = ["root_name", "type_alias", "optional", "export"])]
    options: Option<PathBuf>,
}

/// One unit of conversion work.
#[derive(Debug)]
struct Document {
    label: String,
    payload: Payload,
}

#[derive(Debug)]
enum Payload {
    Text(String),
    Value(Value),
    Failed(String),
}

/// Results in input order.
pub struct Report {
    results: Vec<(String, ConvertResult)>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl DeclarationSettings {
    fn resolve(&self) -> Result<ConvertOptions> {
        if let Some(path) = self.options.as_ref() {
            return crate::path_de::load_options(path);
        }
        Ok(ConvertOptions {
            root_name: self.root_name.clone(),
            use_interface: !self.type_alias,
            optional_properties: self.optional,
            add_export: self.export,
        })
    }
}

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for (label, source) in self.read_sources()? {
            if self.ndjson {
                for (line_no, line) in source.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.prepare(format!("{label}:{}", line_no + 1), line.to_string(), &mut documents);
                }
            } else {
                self.prepare(label, source, &mut documents);
            }
        }
        Ok(documents)
    }

    /// Sources in argument order; every `-` (or no input at all) is stdin, read once.
    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        if self.input.is_empty() {
            return Ok(vec![(STDIN_LABEL.to_string(), read_stdin()?)]);
        }
        let mut stdin: Option<String> = None;
        let mut sources = Vec::new();
        for raw in &self.input {
            if raw == "-" {
                let source = match &stdin {
                    Some(source) => source.clone(),
                    None => {
                        let source = read_stdin()?;
                        stdin = Some(source.clone());
                        source
                    }
                };
                sources.push((STDIN_LABEL.to_string(), source));
                continue;
            }
            let source_paths = resolve_file_path_patterns([raw])?;
            info!(pattern = %raw, files = source_paths.len(), "resolved input");
            for source_path in source_paths {
                let label = source_path.to_string_lossy().to_string();
                let source = std::fs::read_to_string(&source_path)
                    .with_context(|| format!("failed to read source file {label}"))?;
                sources.push((label, source));
            }
        }
        Ok(sources)
    }

    /// Apply pointer / jq selection; parse failures become failed documents.
    fn prepare(&self, label: String, source: String, documents: &mut Vec<Document>) {
        if self.json_pointer.is_none() && self.jq_expr.is_none() {
            documents.push(Document { label, payload: Payload::Text(source) });
            return;
        }

        let value = match serde_json::from_str::<Value>(&source) {
            Ok(value) => value,
            Err(error) => {
                let message = Error::Parse(error).to_string();
                documents.push(Document { label, payload: Payload::Failed(message) });
                return;
            }
        };

        let value = match self.json_pointer.as_deref() {
            None => value,
            Some(pointer) => match value.pointer(pointer) {
                Some(selected) => selected.clone(),
                None => {
                    let message = format!("JSON pointer {pointer} did not resolve");
                    documents.push(Document { label, payload: Payload::Failed(message) });
                    return;
                }
            },
        };

        let Some(jq_expr) = self.jq_expr.as_deref() else {
            documents.push(Document { label, payload: Payload::Value(value) });
            return;
        };
        match crate::jq_exec::apply_filter(jq_expr, &value) {
            Ok(outputs) => {
                debug!(%label, outputs = outputs.len(), "jq filter applied");
                for (i, text) in outputs.into_iter().enumerate() {
                    documents.push(Document {
                        label: format!("{label}#{i}"),
                        payload: Payload::Text(text),
                    });
                }
            }
            Err(error) => {
                documents.push(Document { label, payload: Payload::Failed(format!("{error:#}")) });
            }
        }
    }
}

impl Document {
    fn convert(&self, options: &ConvertOptions) -> ConvertResult {
        match &self.payload {
            Payload::Text(text) => convert(text, options),
            Payload::Value(value) => convert_value(value, options).into(),
            Payload::Failed(message) => ConvertResult::failure(message.clone()),
        }
    }
}

impl Report {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|(_, result)| result.success)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn init_logging(&self) {
        let default_level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<Report> {
        let options = self.declaration_settings.resolve()?;
        debug!(?options, "resolved options");

        let documents = self.input_settings.load_documents()?;
        info!(documents = documents.len(), "converting");

        // the engine keeps no state between calls, so documents convert independently
        let results: Vec<(String, ConvertResult)> = documents
            .par_iter()
            .map(|doc| (doc.label.clone(), doc.convert(&options)))
            .collect();

        let mut rendered = Vec::with_capacity(results.len());
        for (label, result) in &results {
            if self.result_json {
                rendered.push(serde_json::to_string_pretty(result)?);
                continue;
            }
            if result.success {
                debug!(%label, bytes = result.output.len(), "converted");
                rendered.push(result.output.clone());
            } else {
                let message = result.error.as_deref().unwrap_or_default();
                warn!(%label, "conversion failed");
                eprintln!("{} {label}: {message}", "error:".red().bold());
            }
        }

        let text = rendered.join("\n\n");
        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "wrote output");
        } else if !text.is_empty() {
            println!("{text}");
        }

        Ok(Report { results })
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

const STDIN_LABEL: &str = "<stdin>";

fn read_stdin() -> Result<String> {
    info!("reading stdin");
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok(source)
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
