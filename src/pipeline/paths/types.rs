use serde::{Deserialize, Serialize};

/// Parts of an uploaded `pdf/` key, carried from the splitter to later stages
/// so no stage has to re-derive the folder prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceKey {
    /// `""` or a `/`-terminated folder path.
    pub folder_prefix: String,
    /// File name with its last extension removed.
    pub basename: String,
}

/// Parts of a chunk key under `temp/`, as seen by the autotag stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkKey {
    pub folder_prefix: String,
    pub base_name: String,
    /// Chunk file name, passed through unchanged.
    pub file_key: String,
}

/// Output location of the merge stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergerPathResult {
    pub output_key: String,
    pub base_file_name: String,
}

/// Every key the splitter writes for one source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPlan {
    pub source_key: String,
    pub folder_prefix: String,
    pub basename: String,
    pub chunk_paths: Vec<String>,
}

/// Keys the autotag stage reads and writes for one chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutotagPlan {
    pub base_name: String,
    pub file_key: String,
    pub download_path: String,
    pub upload_path: String,
    pub autotag_folder: String,
}
