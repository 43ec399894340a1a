use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::OutputFormat;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_pipeline::PipelineConfig;
use libgraphql_pipeline::QueryDocumentBuilder;
use libgraphql_pipeline::ValidatedDocument;
use libgraphql_pipeline::file_reader;
use libgraphql_pipeline::schema::Schema;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Reject operations whose field selections nest deeper than \
             this.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Schema definition language files describing the schema to \
             validate against. May be given more than once.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Treat warnings (e.g. use of deprecated fields) as validation \
             failures.",
        long,
    )]
    treat_warnings_as_errors: bool,

    #[arg(
        help="Paths to one or more query documents or directories containing \
             query documents which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    fn find_query_files(&self, errors: &mut Vec<String>) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                        continue
                    },
                };

                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                let has_graphql_ext = path.extension()
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                if has_graphql_ext {
                    log::trace!("Found query document at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file passed explicitly is validated even when its
        // extension doesn't match `--graphql-file-exts`.
        let explicit_file = match self.file_or_dir_paths.as_slice() {
            [only_path] if file_paths.is_empty() && only_path.is_file() =>
                Some(only_path),
            _ => None,
        };
        if let Some(only_path) = explicit_file {
            log::warn!(
                "Proceeding to validate {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(only_path.to_path_buf());
            num_skipped_files -= 1;
        }

        (file_paths, num_skipped_files)
    }

    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_max_query_depth(self.max_depth)
            .with_treat_warnings_as_errors(self.treat_warnings_as_errors)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let schema = match load_schema(&self.schema) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load the schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut errors = vec![];
        let (file_paths, num_skipped_files) = self.find_query_files(&mut errors);
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to find query documents: {errors:#?}",
                output_utils::RED_X,
            ));
        }
        log::debug!(
            "Found {} query documents to be validated.",
            file_paths.len(),
        );

        let builder = QueryDocumentBuilder::new(&schema)
            .with_config(self.pipeline_config());
        let mut validated_files = vec![];
        for file_path in file_paths {
            match builder.from_file(&file_path) {
                Ok(validated) => validated_files.push((file_path, validated)),
                Err(e) => errors.push(e.to_string()),
            }
        }
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to read query documents: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        let all_valid = validated_files.iter().all(|(_, validated)| validated.is_valid());
        let report = match cli.format {
            OutputFormat::Json => match json_report(&validated_files) {
                Ok(report) => report,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize validation results: {e}",
                    output_utils::RED_X,
                )),
            },
            OutputFormat::Text => text_report(&validated_files, num_skipped_files),
        };
        CommandResult::report(report, all_valid)
    }
}

fn load_schema(schema_paths: &[PathBuf]) -> anyhow::Result<Schema> {
    let sdl = file_reader::read_concatenated(schema_paths)
        .context("reading schema files")?;
    let schema = Schema::from_sdl(sdl)
        .with_context(|| format!("loading schema from {schema_paths:?}"))?;
    Ok(schema)
}

fn json_report(
    validated_files: &[(PathBuf, ValidatedDocument)],
) -> serde_json::Result<String> {
    let files = validated_files.iter()
        .map(|(file_path, validated)| {
            Ok(serde_json::json!({
                "file": file_path.display().to_string(),
                "result": serde_json::to_value(validated.validation_result())?,
            }))
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string_pretty(&files)
}

fn text_report(
    validated_files: &[(PathBuf, ValidatedDocument)],
    num_skipped_files: usize,
) -> String {
    let mut report = String::new();
    let mut num_invalid_files = 0;
    let mut num_operations = 0;
    for (file_path, validated) in validated_files {
        if !validated.is_valid() {
            num_invalid_files += 1;
        }
        if let Some(document) = validated.document() {
            num_operations += document.operations().len();
        }
        write_messages(&mut report, file_path, validated);
    }

    if num_invalid_files == 0 {
        let _ = write!(
            report,
            concat!(
                "{} All query documents validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            validated_files.len(),
            num_skipped_files,
            num_operations,
        );
    } else {
        let _ = write!(
            report,
            "{} {num_invalid_files} of {} query documents failed validation.",
            output_utils::RED_X,
            validated_files.len(),
        );
    }
    report
}

fn write_messages(report: &mut String, file_path: &Path, validated: &ValidatedDocument) {
    for message in validated.messages() {
        let marker =
            if message.severity().is_error() {
                output_utils::RED_X
            } else {
                output_utils::WARNING_SIGN
            };
        let _ = writeln!(report, "{marker} {}: {message}", file_path.display());
    }
}
