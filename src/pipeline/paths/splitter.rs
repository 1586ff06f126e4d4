use crate::config::{CHUNK_MARKER, PDF_EXTENSION, PDF_PREFIX, TEMP_PREFIX};

use super::{strip_required, ChunkKey, PathError, SourceKey, SplitPlan};

/// Folder path between `pdf/` and the file name, with its trailing slash.
///
/// `pdf/folder1/folder2/myfile.pdf` -> `folder1/folder2/`
/// `pdf/myfile.pdf` -> `""`
pub fn extract_folder_prefix(key: &str) -> Result<String, PathError> {
    let relative = strip_required(key, PDF_PREFIX)?;
    let prefix = match relative.rfind('/') {
        Some(idx) => &relative[..=idx],
        None => "",
    };
    Ok(prefix.to_string())
}

/// File name of a `pdf/` key with exactly one trailing extension removed.
///
/// `pdf/folder1/report.v2.pdf` -> `report.v2`
pub fn extract_file_basename(key: &str) -> Result<String, PathError> {
    let relative = strip_required(key, PDF_PREFIX)?;
    let file_name = relative.rsplit('/').next().unwrap_or(relative);
    let basename = match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    };
    if basename.is_empty() {
        return Err(PathError::EmptyBasename(key.to_string()));
    }
    Ok(basename.to_string())
}

/// `{basename}_chunk_{chunk_index}.pdf`
pub fn construct_chunk_filename(basename: &str, chunk_index: usize) -> String {
    format!("{basename}{CHUNK_MARKER}{chunk_index}{PDF_EXTENSION}")
}

/// `temp/{folder_prefix}{basename}/{basename}_chunk_{chunk_index}.pdf`
///
/// Chunk indices are 1-based; the caller is trusted to pass a positive one.
pub fn construct_chunk_path(folder_prefix: &str, basename: &str, chunk_index: usize) -> String {
    format!(
        "{TEMP_PREFIX}{folder_prefix}{basename}/{}",
        construct_chunk_filename(basename, chunk_index)
    )
}

impl SourceKey {
    /// Parse an uploaded `pdf/` key into its folder prefix and basename.
    pub fn parse(key: &str) -> Result<Self, PathError> {
        let folder_prefix = extract_folder_prefix(key)?;
        let basename = extract_file_basename(key)?;

        tracing::debug!(
            key = %key,
            folder_prefix = %folder_prefix,
            basename = %basename,
            "Parsed source key"
        );

        Ok(Self {
            folder_prefix,
            basename,
        })
    }

    pub fn chunk_path(&self, chunk_index: usize) -> String {
        construct_chunk_path(&self.folder_prefix, &self.basename, chunk_index)
    }

    /// Chunk keys `1..=count`, in page order.
    pub fn chunk_paths(&self, count: usize) -> Vec<String> {
        (1..=count).map(|n| self.chunk_path(n)).collect()
    }

    /// Hand chunk `chunk_index` to the autotag stage without re-parsing its key.
    pub fn chunk_key(&self, chunk_index: usize) -> ChunkKey {
        ChunkKey {
            folder_prefix: self.folder_prefix.clone(),
            base_name: self.basename.clone(),
            file_key: construct_chunk_filename(&self.basename, chunk_index),
        }
    }

    pub fn split_plan(&self, source_key: &str, count: usize) -> SplitPlan {
        SplitPlan {
            source_key: source_key.to_string(),
            folder_prefix: self.folder_prefix.clone(),
            basename: self.basename.clone(),
            chunk_paths: self.chunk_paths(count),
        }
    }
}
