//! Command-line entry points for the path derivation stages.
//!
//! Each subcommand takes the key the job runner would receive and prints the
//! keys that stage reads and writes, as JSON.

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::pipeline::paths::{
    construct_output_path, construct_return_string, ChunkKey, PathError, SourceKey,
};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "pdf-chunk-paths",
    version,
    about = "Derive object keys for the PDF split, autotag and merge stages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Chunk keys for an uploaded `pdf/` key.
    Split {
        key: String,

        /// Number of chunks the document was split into.
        #[arg(long, default_value = "1")]
        chunks: NonZeroUsize,
    },

    /// Download, upload and output folder keys for one chunk.
    Autotag {
        key: String,

        /// Folder prefix the splitter derived for this document.
        #[arg(long, default_value = "")]
        folder_prefix: String,
    },

    /// Output key and summary for the merged document.
    Merge {
        #[arg(long, env = "PDF_BUCKET")]
        bucket: String,

        /// Omit for documents uploaded directly under `pdf/`.
        #[arg(long)]
        folder_prefix: Option<String>,

        #[arg(required = true)]
        chunk_keys: Vec<String>,
    },
}

/// Output of the `merge` command
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub output_key: String,
    pub base_file_name: String,
    pub summary: String,
}

impl Command {
    /// Run the command and render its result as pretty JSON.
    pub fn execute(&self) -> Result<String, CliError> {
        match self {
            Self::Split { key, chunks } => {
                let plan = SourceKey::parse(key)?.split_plan(key, chunks.get());
                tracing::info!(
                    key = %key,
                    chunks = plan.chunk_paths.len(),
                    "Derived split plan"
                );
                Ok(serde_json::to_string_pretty(&plan)?)
            }
            Self::Autotag { key, folder_prefix } => {
                let plan = ChunkKey::parse(key, folder_prefix)?.autotag_plan();
                tracing::info!(key = %key, upload_path = %plan.upload_path, "Derived autotag plan");
                Ok(serde_json::to_string_pretty(&plan)?)
            }
            Self::Merge {
                bucket,
                folder_prefix,
                chunk_keys,
            } => {
                let result = construct_output_path(folder_prefix.as_deref(), chunk_keys.as_slice())?;
                let summary =
                    construct_return_string(bucket, &result.output_key, &result.base_file_name);
                tracing::info!(output_key = %result.output_key, "Derived merge output");
                let report = MergeReport {
                    output_key: result.output_key,
                    base_file_name: result.base_file_name,
                    summary,
                };
                Ok(serde_json::to_string_pretty(&report)?)
            }
        }
    }
}
