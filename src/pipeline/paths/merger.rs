use crate::config::{CHUNK_MARKER, MERGED_PREFIX, TEMP_PREFIX};

use super::{MergerPathResult, PathError};

/// Where the merge stage writes the recombined document.
///
/// The base file name comes from the first chunk key with its `_chunk_{n}`
/// marker removed (`my_file_chunk_1.pdf` -> `my_file.pdf`). A missing folder
/// prefix is the flat layout.
pub fn construct_output_path<S: AsRef<str>>(
    folder_prefix: Option<&str>,
    chunk_keys: &[S],
) -> Result<MergerPathResult, PathError> {
    let folder_prefix = folder_prefix.unwrap_or_default();
    let first: &str = chunk_keys.first().ok_or(PathError::NoChunks)?.as_ref();
    let (stem, extension) = split_chunk_file_name(first)?;

    let chunk_dir = format!("{TEMP_PREFIX}{folder_prefix}{stem}/");
    for key in chunk_keys {
        let key: &str = key.as_ref();
        if !key.starts_with(&chunk_dir) {
            tracing::warn!(
                key = %key,
                expected_dir = %chunk_dir,
                "Chunk key is outside the merged document's folder"
            );
        }
    }

    let base_file_name = format!("{stem}{extension}");
    let output_key = format!("{chunk_dir}{MERGED_PREFIX}{base_file_name}");

    tracing::debug!(
        chunks = chunk_keys.len(),
        output_key = %output_key,
        "Constructed merge output path"
    );

    Ok(MergerPathResult {
        output_key,
        base_file_name,
    })
}

/// Summary line the merge stage reports back to the workflow.
pub fn construct_return_string(bucket: &str, output_key: &str, base_file_name: &str) -> String {
    format!(
        "PDFs merged successfully. Bucket: {bucket}, Merged File Key: {output_key}, Merged File Name: {base_file_name}"
    )
}

/// `{stem}_chunk_{digits}{extension}` -> `(stem, extension)`
fn split_chunk_file_name(chunk_key: &str) -> Result<(&str, &str), PathError> {
    let invalid = || PathError::InvalidChunkKey(chunk_key.to_string());

    let file_name = chunk_key.rsplit('/').next().unwrap_or(chunk_key);
    let marker = file_name.rfind(CHUNK_MARKER).ok_or_else(invalid)?;
    let stem = &file_name[..marker];
    let after = &file_name[marker + CHUNK_MARKER.len()..];
    let digits = after
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(after.len());

    if stem.is_empty() || digits == 0 {
        return Err(invalid());
    }
    Ok((stem, &after[digits..]))
}
