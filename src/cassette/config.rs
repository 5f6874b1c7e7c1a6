//! Cassette loading.

use std::path::Path;

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Load a cassette file and create a replayer.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cassette(path: &Path) -> Result<CassetteReplayer, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
    Ok(CassetteReplayer::new(&cassette))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_valid_cassette() {
        let dir = std::env::temp_dir().join("bannergen_cassette_load_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.cassette.yaml");
        std::fs::write(
            &path,
            "name: t\nrecorded_at: \"2026-10-01T00:00:00Z\"\ncommit: abc\ninteractions:\n  \
             - seq: 0\n    port: rasterizer\n    method: rasterize\n    input: {}\n    \
             output:\n      Ok:\n        data: AQID\n        mime_type: image/png\n",
        )
        .unwrap();

        let mut replayer = load_cassette(&path).unwrap();
        let i = replayer.next_interaction("rasterizer", "rasterize").unwrap();
        assert_eq!(i.seq, 0);
        assert_eq!(i.output["Ok"]["data"], "AQID");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_nonexistent_fails() {
        assert!(load_cassette(Path::new("/nonexistent/cassette.yaml")).is_err());
    }

    #[test]
    fn load_malformed_fails() {
        let path = std::env::temp_dir().join("bannergen_cassette_bad.yaml");
        std::fs::write(&path, "interactions: [oops").unwrap();
        let err = load_cassette(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse cassette file"));
        let _ = std::fs::remove_file(&path);
    }
}
