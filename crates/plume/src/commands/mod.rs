//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use plume_core::config::Config;
use plume_core::markdown;

pub mod analyze;
pub mod book;
pub mod check;
pub mod info;
pub mod review;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a chapter and reduce it to the prose the engine should see.
///
/// Markdown is stripped when the config asks for it, or by default for
/// `.md` files.
pub fn read_chapter(
    path: &Utf8Path,
    config: &Config,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if config.strips_markdown(path) {
        tracing::debug!(file = %path, "stripping markdown");
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}

/// Chapter title for a file: its first Markdown heading, else the file stem.
pub fn chapter_title(path: &Utf8Path, raw: &str) -> String {
    markdown::first_heading(raw)
        .or_else(|| path.file_stem().map(str::to_string))
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn rejects_oversized_input() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "long.txt", &"a".repeat(100));
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/nonexistent/ch1.md"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn markdown_stripped_for_md_files() {
        let tmp = TempDir::new().unwrap();
        let md = write(&tmp, "ch1.md", "# Titre\n\nLe **chat** dort.");
        let txt = write(&tmp, "ch1.txt", "# Titre\n\nLe **chat** dort.");
        let config = Config::default();
        assert_eq!(read_chapter(&md, &config, None).unwrap(), "Le chat dort.");
        assert!(read_chapter(&txt, &config, None).unwrap().contains("**chat**"));
    }

    #[test]
    fn title_from_heading_or_stem() {
        assert_eq!(chapter_title(Utf8Path::new("x/ch1.md"), "# L'Aube\n\nTexte."), "L'Aube");
        assert_eq!(chapter_title(Utf8Path::new("x/ch1.md"), "Texte."), "ch1");
    }
}
