use std::path::{Path, PathBuf};

use shrinkray_document::{load_document, save_document};

use crate::config::OutputConfig;
use crate::ent::scale_ent;
use crate::error::ScaleError;
use crate::rig::scale_rig;

pub const RIG_SUFFIX: &str = ".rig.json";
pub const ENT_SUFFIX: &str = ".ent.json";

/// Checks the conventional double extension before any file is opened.
pub fn validate_suffix(filename: &str, expected: &'static str) -> Result<(), ScaleError> {
    if filename.ends_with(expected) {
        return Ok(());
    }
    Err(ScaleError::InvalidSuffix {
        filename: filename.to_string(),
        expected,
    })
}

/// Derives the output path by prepending `prefix` to the input's filename.
/// The directory part stays where it is.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    match input.file_name() {
        Some(name) => input.with_file_name(format!("{prefix}{}", name.to_string_lossy())),
        None => input.with_file_name(prefix),
    }
}

/// Loads a rig document, scales every bone transform and writes the result
/// next to the input. The input file is never modified.
pub fn scale_rig_file(
    input: &Path,
    factor: f64,
    config: &OutputConfig,
) -> Result<PathBuf, ScaleError> {
    let mut document = load_document(input)?;
    scale_rig(&mut document, factor)?;
    let output = output_path(input, &config.prefix);
    save_document(&output, &document)?;
    Ok(output)
}

/// The entity counterpart of [`scale_rig_file`].
pub fn scale_ent_file(
    input: &Path,
    factor: f64,
    config: &OutputConfig,
) -> Result<PathBuf, ScaleError> {
    let mut document = load_document(input)?;
    scale_ent(&mut document, factor)?;
    let output = output_path(input, &config.prefix);
    save_document(&output, &document)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use serde_json::json;
    use shrinkray_document::{DocumentError, load_document, render_document};

    use super::*;

    static TEST_DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    fn temp_test_dir() -> std::path::PathBuf {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("shrinkray_pipeline_test_{pid}_{nonce}_{seq}"))
    }

    // -------------------- Suffix validation --------------------

    #[test]
    fn validate_suffix_accepts_the_conventional_extension() {
        assert!(validate_suffix("mech.rig.json", RIG_SUFFIX).is_ok());
        assert!(validate_suffix("drone.ent.json", ENT_SUFFIX).is_ok());
    }

    #[test]
    fn validate_suffix_rejects_other_filenames() {
        let err = validate_suffix("foo.txt", RIG_SUFFIX).expect_err("expected rejection");
        assert!(matches!(
            err,
            ScaleError::InvalidSuffix { filename, expected: ".rig.json" } if filename == "foo.txt"
        ));
    }

    #[test]
    fn validate_suffix_is_case_sensitive() {
        assert!(validate_suffix("mech.RIG.JSON", RIG_SUFFIX).is_err());
    }

    #[test]
    fn validate_suffix_rejects_swapped_extensions() {
        assert!(validate_suffix("mech.rig.json", ENT_SUFFIX).is_err());
        assert!(validate_suffix("drone.ent.json", RIG_SUFFIX).is_err());
    }

    // -------------------- Output naming --------------------

    #[test]
    fn output_path_prepends_the_prefix() {
        assert_eq!(
            output_path(Path::new("mech.rig.json"), "scaled_"),
            PathBuf::from("scaled_mech.rig.json")
        );
    }

    #[test]
    fn output_path_keeps_the_directory() {
        assert_eq!(
            output_path(Path::new("assets/rigs/mech.rig.json"), "scaled_"),
            PathBuf::from("assets/rigs/scaled_mech.rig.json")
        );
    }

    // -------------------- File scaling --------------------

    #[test]
    fn scale_rig_file_writes_a_prefixed_copy() {
        let dir = temp_test_dir();
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        let input = dir.join("mech.rig.json");
        let document = json!({
            "Data": {
                "RootChunk": {
                    "boneTransforms": [
                        {
                            "Scale": { "X": 1, "Y": 1, "Z": 1 },
                            "Translation": { "X": 10, "Y": 0, "Z": 0 }
                        }
                    ]
                }
            }
        });
        fs::write(&input, render_document(&document).expect("render"))
            .expect("failed to write input");
        let before = fs::read_to_string(&input).expect("input readable");

        let config = OutputConfig::default();
        let output = scale_rig_file(&input, 0.5, &config).expect("scaling failed");

        assert_eq!(output, dir.join("scaled_mech.rig.json"));
        // The source document is untouched.
        assert_eq!(fs::read_to_string(&input).expect("input readable"), before);

        let scaled = load_document(&output).expect("output readable");
        let bone = &scaled["Data"]["RootChunk"]["boneTransforms"][0];
        assert_eq!(bone["Scale"]["X"], json!(0.5));
        assert_eq!(bone["Translation"]["X"], json!(5.0));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn scale_ent_file_honours_a_custom_prefix() {
        let dir = temp_test_dir();
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        let input = dir.join("drone.ent.json");
        let document = json!({
            "Data": {
                "RootChunk": {
                    "components": [
                        {
                            "$type": "entMeshComponent",
                            "visualScale": { "X": 2, "Y": 2, "Z": 2 }
                        }
                    ]
                }
            }
        });
        fs::write(&input, render_document(&document).expect("render"))
            .expect("failed to write input");

        let config = OutputConfig {
            prefix: "tiny_".to_string(),
        };
        let output = scale_ent_file(&input, 3.0, &config).expect("scaling failed");

        assert_eq!(output, dir.join("tiny_drone.ent.json"));
        let scaled = load_document(&output).expect("output readable");
        let visual = &scaled["Data"]["RootChunk"]["components"][0]["visualScale"];
        assert_eq!(visual["Y"], json!(6.0));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn scale_rig_file_reports_a_missing_input() {
        let dir = temp_test_dir();
        let input = dir.join("ghost.rig.json");
        let err = scale_rig_file(&input, 0.5, &OutputConfig::default())
            .expect_err("expected io failure");
        assert!(matches!(err, ScaleError::Document(DocumentError::Io(_))));
    }

    #[test]
    fn scale_ent_file_leaves_no_output_on_failure() {
        let dir = temp_test_dir();
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        let input = dir.join("broken.ent.json");
        fs::write(&input, "{ \"Data\": {} }").expect("failed to write input");

        let config = OutputConfig::default();
        scale_ent_file(&input, 2.0, &config).expect_err("expected shape failure");
        assert!(!output_path(&input, &config.prefix).exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
