//! TrueType font discovery and registration for text rendering.
//!
//! Text is rasterised with plotters' `ab_glyph` backend, which only knows
//! fonts registered at runtime. The first readable file in the configured
//! search list is registered once per process under the family used by
//! every chart. When none of them loads, the DejaVu Sans faces built into
//! the binary are used.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};
use tracing::{debug, info, warn};

use super::style::FONT_FAMILY;
use crate::{KvPlotError, Result};

static BUNDLED_REGULAR: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
static BUNDLED_BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

static REGISTERED: OnceLock<std::result::Result<FontSource, String>> = OnceLock::new();

/// Where the registered chart font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A file from the search list, with the file used for bold text
    File { regular: PathBuf, bold: PathBuf },
    /// The faces compiled into the binary
    Bundled,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File { regular, .. } => write!(f, "{}", regular.display()),
            FontSource::Bundled => f.write_str("bundled DejaVu Sans"),
        }
    }
}

/// First existing file in the search list
pub fn find_font(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| p.is_file()).cloned()
}

/// Bold face expected next to a regular one: `DejaVuSans.ttf` gives
/// `DejaVuSans-Bold.ttf`, `LiberationSans-Regular.ttf` gives
/// `LiberationSans-Bold.ttf`
pub fn bold_sibling(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let stem = stem.strip_suffix("-Regular").unwrap_or(stem);
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-Bold.{}", stem, ext),
        None => format!("{}-Bold", stem),
    };
    Some(path.with_file_name(name))
}

/// Register a font from the search list, once per process
///
/// Later calls return the outcome of the first one, whatever list they pass.
pub fn ensure_registered(paths: &[PathBuf]) -> Result<FontSource> {
    REGISTERED
        .get_or_init(|| register_first(paths))
        .clone()
        .map_err(KvPlotError::FontUnavailable)
}

fn register_first(paths: &[PathBuf]) -> std::result::Result<FontSource, String> {
    let mut failures = Vec::new();
    for path in paths.iter().filter(|p| p.is_file()) {
        match register_file(path) {
            Ok(bold) => {
                info!(font = %path.display(), bold = %bold.display(), "registered chart font");
                return Ok(FontSource::File {
                    regular: path.clone(),
                    bold,
                });
            }
            Err(reason) => {
                debug!(font = %path.display(), %reason, "font rejected");
                failures.push(format!("{}: {}", path.display(), reason));
            }
        }
    }

    if failures.is_empty() {
        debug!(candidates = paths.len(), "no font file found, using bundled font");
    } else {
        warn!(failures = %failures.join("; "), "no font file usable, using bundled font");
    }
    register_bundled().map(|()| FontSource::Bundled)
}

/// Register `path` as the regular face, returning the file used for bold
fn register_file(path: &Path) -> std::result::Result<PathBuf, String> {
    let regular = leak_file(path)?;
    register_font(FONT_FAMILY, FontStyle::Normal, regular)
        .map_err(|_| format!("{} is not a usable TrueType/OpenType font", path.display()))?;

    if let Some(bold_path) = bold_sibling(path).filter(|p| p.is_file()) {
        match leak_file(&bold_path).and_then(|bytes| {
            register_font(FONT_FAMILY, FontStyle::Bold, bytes)
                .map_err(|_| "not a usable font".to_string())
        }) {
            Ok(()) => return Ok(bold_path),
            Err(reason) => debug!(font = %bold_path.display(), %reason, "bold face rejected"),
        }
    }
    register_font(FONT_FAMILY, FontStyle::Bold, regular)
        .map_err(|_| format!("{} is not a usable TrueType/OpenType font", path.display()))?;
    Ok(path.to_path_buf())
}

fn register_bundled() -> std::result::Result<(), String> {
    register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_REGULAR)
        .and_then(|()| register_font(FONT_FAMILY, FontStyle::Bold, BUNDLED_BOLD))
        .map_err(|_| "the bundled font could not be loaded".to_string())
}

fn leak_file(path: &Path) -> std::result::Result<&'static [u8], String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    // plotters keeps a reference to the font data for the life of the process
    Ok(Box::leak(bytes.into_boxed_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_find_font_skips_missing() {
        let file = NamedTempFile::new().unwrap();
        let paths = vec![
            PathBuf::from("/definitely/not/here.ttf"),
            file.path().to_path_buf(),
        ];
        assert_eq!(find_font(&paths), Some(file.path().to_path_buf()));
        assert_eq!(find_font(&paths[..1]), None);
    }

    #[test]
    fn test_bold_sibling_name() {
        assert_eq!(
            bold_sibling(Path::new("/usr/share/fonts/DejaVuSans.ttf")),
            Some(PathBuf::from("/usr/share/fonts/DejaVuSans-Bold.ttf"))
        );
        assert_eq!(
            bold_sibling(Path::new("/fonts/LiberationSans-Regular.ttf")),
            Some(PathBuf::from("/fonts/LiberationSans-Bold.ttf"))
        );
        assert_eq!(
            bold_sibling(Path::new("fonts/Plain")),
            Some(PathBuf::from("fonts/Plain-Bold"))
        );
    }

    #[test]
    fn test_register_rejects_non_font() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not a font").unwrap();
        let reason = register_file(file.path()).unwrap_err();
        assert!(reason.contains(&file.path().display().to_string()));
        assert!(reason.contains("not a usable TrueType/OpenType font"));
    }

    #[test]
    fn test_unusable_files_fall_back_to_bundled() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not a font").unwrap();
        let outcome = register_first(&[file.path().to_path_buf()]);
        assert_eq!(outcome, Ok(FontSource::Bundled));
    }

    #[test]
    fn test_nothing_found_falls_back_to_bundled() {
        let outcome = register_first(&[PathBuf::from("/definitely/not/here.ttf")]);
        assert_eq!(outcome, Ok(FontSource::Bundled));
        assert_eq!(FontSource::Bundled.to_string(), "bundled DejaVu Sans");
    }

    #[test]
    fn test_bold_sibling_is_registered_for_bold() {
        let dir = TempDir::new().unwrap();
        let regular = dir.path().join("Face.ttf");
        let bold = dir.path().join("Face-Bold.ttf");
        fs::write(&regular, BUNDLED_REGULAR).unwrap();

        // without a sibling, bold text reuses the regular face
        assert_eq!(register_file(&regular), Ok(regular.clone()));

        fs::write(&bold, BUNDLED_BOLD).unwrap();
        assert_eq!(register_file(&regular), Ok(bold.clone()));

        // a broken sibling does not prevent registration
        fs::write(&bold, "not a font").unwrap();
        assert_eq!(register_file(&regular), Ok(regular.clone()));
    }

    #[test]
    fn test_ensure_registered_always_succeeds() {
        assert!(ensure_registered(&[]).is_ok());
    }
}
