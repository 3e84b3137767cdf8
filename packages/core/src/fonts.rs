//! Font files for the article families, read from a fonts directory
//!
//! No font binaries ship with Lector. Users drop `.ttf` or `.otf` files for
//! families like Ubuntu or Days One into the fonts directory and the shell
//! registers them with the toolkit at startup. Families without a file fall
//! back to whatever the system provides.

use crate::ReaderResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the fonts directory
pub const FONTS_ENV: &str = "LECTOR_FONTS";

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// A font file read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Default fonts directory
///
/// `LECTOR_FONTS` wins when set; otherwise `fonts` under the platform data
/// directory, falling back to the temp directory.
pub fn default_fonts_dir() -> PathBuf {
    if let Some(path) = std::env::var_os(FONTS_ENV) {
        return PathBuf::from(path);
    }

    directories::ProjectDirs::from("app", "lector", "Lector")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("lector"))
        .join("fonts")
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read every font file directly inside `dir`, sorted by path
///
/// A missing directory yields no fonts.
pub async fn read_font_files(dir: &Path) -> ReaderResult<Vec<FontFile>> {
    if !tokio::fs::try_exists(dir).await? {
        debug!("No fonts directory at {:?}", dir);
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && is_font_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut fonts = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(&path).await?;
        debug!("Read font {:?} ({} bytes)", path, bytes.len());
        fonts.push(FontFile { path, bytes });
    }
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_extensions() {
        assert!(is_font_file(Path::new("Ubuntu-Regular.ttf")));
        assert!(is_font_file(Path::new("DaysOne.OTF")));
        assert!(!is_font_file(Path::new("notes.txt")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    #[tokio::test]
    async fn test_read_font_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.OTF"), b"otf").unwrap();
        std::fs::write(dir.path().join("a.ttf"), b"ttf").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"skip").unwrap();
        std::fs::create_dir(dir.path().join("nested.ttf")).unwrap();

        let fonts = read_font_files(dir.path()).await.unwrap();

        let names: Vec<_> = fonts
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ttf", "b.OTF"]);
        assert_eq!(fonts[0].bytes, b"ttf");
    }

    #[tokio::test]
    async fn test_missing_fonts_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fonts = read_font_files(&dir.path().join("absent")).await.unwrap();
        assert!(fonts.is_empty());
    }
}
