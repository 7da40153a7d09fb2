// File: src/persistence.rs
use crate::core::rules::RuleSet;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `rules` as a binary rule pack. The file is replaced atomically.
pub fn save_rules_to_disk(rules: &RuleSet, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, rules)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), topics = rules.rules().len(), "saved rule pack");
    Ok(())
}

/// Reads a binary rule pack written by [`save_rules_to_disk`].
pub fn load_rules_from_disk(path: &Path) -> Result<RuleSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let rules: RuleSet = bincode::deserialize_from(reader)?;
    Ok(rules)
}

/// Reads a hand-written rule pack:
///
/// ```json
/// {
///   "rules": [{"topic": "tax", "keywords": ["tax"], "responses": {"en": "..."}}],
///   "fallback": {"en": "..."}
/// }
/// ```
pub fn load_rules_from_json(path: &Path) -> Result<RuleSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let rules: RuleSet = serde_json::from_reader(reader)?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::builtin_rules;
    use crate::error::MentorError;

    #[test]
    fn binary_pack_survives_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packs").join("mentor.bin");
        save_rules_to_disk(&builtin_rules(), &path).unwrap();
        assert_eq!(load_rules_from_disk(&path).unwrap(), builtin_rules());
    }

    #[test]
    fn save_replaces_existing_pack() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentor.bin");
        fs::write(&path, b"stale").unwrap();
        save_rules_to_disk(&builtin_rules(), &path).unwrap();
        assert!(load_rules_from_disk(&path).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rules_from_disk(&dir.path().join("nope.bin")).unwrap_err();
        assert!(matches!(err, MentorError::Io(_)));
    }

    #[test]
    fn garbage_binary_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        fs::write(&path, [0xffu8; 7]).unwrap();
        assert!(load_rules_from_disk(&path).is_err());
    }

    #[test]
    fn json_pack_without_default_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack.json");
        fs::write(
            &path,
            r#"{"rules": [{"topic": "tax", "keywords": ["tax"], "responses": {"es": "Impuestos"}}],
                "fallback": {"en": "?"}}"#,
        )
        .unwrap();
        assert!(matches!(load_rules_from_json(&path), Err(MentorError::Json(_))));
    }
}
