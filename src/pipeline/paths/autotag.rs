//! Autotag stage keys.
//!
//! The autotag worker is handed a chunk key `temp/{folder_prefix}{base_name}/{file_key}`
//! together with the folder prefix the splitter computed. It downloads the chunk,
//! and writes the tagged result under `output_autotag/` beside it.

use crate::config::{AUTOTAG_FOLDER, COMPLIANT_PREFIX, TEMP_PREFIX};

use super::{strip_required, AutotagPlan, ChunkKey, PathError};

/// Split a chunk key into `(base_name, file_key)`.
///
/// `folder_prefix` must be the prefix the splitter derived for this document;
/// it is not re-derived here. A key that does not start with
/// `temp/{folder_prefix}` is rejected. A prefix that happens to match textually
/// but is not the upstream one still splits at the wrong place.
pub fn extract_file_base_name_and_key(
    s3_file_key: &str,
    folder_prefix: &str,
) -> Result<(String, String), PathError> {
    let expected = format!("{TEMP_PREFIX}{folder_prefix}");
    let remainder = strip_required(s3_file_key, &expected)?;

    let mut parts = remainder.split('/');
    let base_name = parts.next().unwrap_or_default();
    if base_name.is_empty() {
        return Err(PathError::EmptyBasename(s3_file_key.to_string()));
    }
    let file_key = match parts.next() {
        Some(k) if !k.is_empty() => k,
        _ => return Err(PathError::MissingFileKey(s3_file_key.to_string())),
    };

    if parts.next().is_some() {
        tracing::warn!(
            key = %s3_file_key,
            folder_prefix = %folder_prefix,
            "Chunk key has segments after the file name; they are ignored"
        );
    }

    Ok((base_name.to_string(), file_key.to_string()))
}

/// `temp/{folder_prefix}{file_base_name}/{file_key}`
pub fn construct_download_path(folder_prefix: &str, file_base_name: &str, file_key: &str) -> String {
    format!("{TEMP_PREFIX}{folder_prefix}{file_base_name}/{file_key}")
}

/// `temp/{folder_prefix}{file_base_name}/output_autotag/COMPLIANT_{file_key}`
pub fn construct_upload_path(folder_prefix: &str, file_base_name: &str, file_key: &str) -> String {
    format!(
        "{}/{COMPLIANT_PREFIX}{file_key}",
        construct_s3_folder_autotag(folder_prefix, file_base_name)
    )
}

/// `temp/{folder_prefix}{file_base_name}/output_autotag`
pub fn construct_s3_folder_autotag(folder_prefix: &str, file_base_name: &str) -> String {
    format!("{TEMP_PREFIX}{folder_prefix}{file_base_name}/{AUTOTAG_FOLDER}")
}

impl ChunkKey {
    pub fn parse(s3_file_key: &str, folder_prefix: &str) -> Result<Self, PathError> {
        let (base_name, file_key) = extract_file_base_name_and_key(s3_file_key, folder_prefix)?;

        tracing::debug!(
            key = %s3_file_key,
            base_name = %base_name,
            file_key = %file_key,
            "Parsed chunk key"
        );

        Ok(Self {
            folder_prefix: folder_prefix.to_string(),
            base_name,
            file_key,
        })
    }

    pub fn download_path(&self) -> String {
        construct_download_path(&self.folder_prefix, &self.base_name, &self.file_key)
    }

    pub fn upload_path(&self) -> String {
        construct_upload_path(&self.folder_prefix, &self.base_name, &self.file_key)
    }

    pub fn autotag_folder(&self) -> String {
        construct_s3_folder_autotag(&self.folder_prefix, &self.base_name)
    }

    pub fn autotag_plan(&self) -> AutotagPlan {
        AutotagPlan {
            base_name: self.base_name.clone(),
            file_key: self.file_key.clone(),
            download_path: self.download_path(),
            upload_path: self.upload_path(),
            autotag_folder: self.autotag_folder(),
        }
    }
}
