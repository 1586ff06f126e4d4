/// Application-level constants
pub const APP_NAME: &str = "pdf-chunk-paths";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ═══════════════════════════════════════════════════════════
// Object key layout
// ═══════════════════════════════════════════════════════════
//
// bucket/
// ├─ pdf/{folders}/{name}.pdf                          uploaded source
// └─ temp/{folders}{name}/
//    ├─ {name}_chunk_{n}.pdf                           split output
//    ├─ merged_{name}.pdf                              merge output
//    └─ output_autotag/COMPLIANT_{name}_chunk_{n}.pdf  autotag output

/// Top-level prefix that triggers the splitter.
pub const PDF_PREFIX: &str = "pdf/";

/// Top-level prefix for every intermediate and derived object.
pub const TEMP_PREFIX: &str = "temp/";

/// Subfolder holding autotag results for one document.
pub const AUTOTAG_FOLDER: &str = "output_autotag";

/// Filename prefix of an autotagged chunk.
pub const COMPLIANT_PREFIX: &str = "COMPLIANT_";

/// Marker between the basename and the 1-based chunk number.
pub const CHUNK_MARKER: &str = "_chunk_";

pub const PDF_EXTENSION: &str = ".pdf";

/// Filename prefix of the recombined document.
pub const MERGED_PREFIX: &str = "merged_";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "pdf_chunk_paths_lib=debug,pdf_chunk_paths=debug,warn"
    } else {
        "pdf_chunk_paths_lib=info,pdf_chunk_paths=info,warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_slash_terminated() {
        assert!(PDF_PREFIX.ends_with('/'));
        assert!(TEMP_PREFIX.ends_with('/'));
    }

    #[test]
    fn autotag_folder_has_no_slashes() {
        assert!(!AUTOTAG_FOLDER.contains('/'));
    }

    #[test]
    fn log_filter_targets_this_crate() {
        assert!(default_log_filter().contains("pdf_chunk_paths_lib="));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
