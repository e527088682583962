use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs as std_fs;
use std::path::{Path, PathBuf};

use tokio::fs;

const SCRIPTS_DIR: &str = "scripts";
const EXPORTS_DIR: &str = "exports";
const SCRIPT_PREFIX: &str = "guion_";
const SCRIPT_SUFFIX: &str = ".md";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
    pub size: u64,
    pub modified: std::time::SystemTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileType {
    Script,
    Export,
}

pub struct StorageService;

impl StorageService {
    fn ensure_directories() -> Result<()> {
        ensure_directory(Path::new(SCRIPTS_DIR))?;
        ensure_directory(Path::new(EXPORTS_DIR))?;
        Ok(())
    }

    fn script_path(slug: &str) -> PathBuf {
        Path::new(SCRIPTS_DIR).join(format!("{SCRIPT_PREFIX}{slug}{SCRIPT_SUFFIX}"))
    }

    /// Path for an export artifact, e.g. `exports/guion_mi-curso.pdf`.
    pub fn export_path(slug: &str, extension: &str) -> Result<PathBuf> {
        Self::ensure_directories()?;
        Ok(Path::new(EXPORTS_DIR).join(format!("{SCRIPT_PREFIX}{slug}.{extension}")))
    }

    pub fn script_exists(slug: &str) -> bool {
        if Self::ensure_directories().is_err() {
            return false;
        }
        Self::script_path(slug).exists()
    }

    pub async fn save_script(slug: &str, content: &str) -> Result<PathBuf> {
        Self::ensure_directories()?;
        let path = Self::script_path(slug);
        fs::write(&path, content).await?;
        Ok(path)
    }

    pub fn list_files() -> Result<Vec<FileEntry>> {
        Self::ensure_directories()?;
        let mut files = Vec::new();

        collect_entries(SCRIPTS_DIR, FileType::Script, &mut files)?;
        collect_entries(EXPORTS_DIR, FileType::Export, &mut files)?;

        // Newest first
        files.sort_by(|a, b| b.modified.cmp(&a.modified));

        Ok(files)
    }

    pub fn delete_file(path: &Path) -> Result<()> {
        Self::ensure_directories()?;
        ensure_managed_path(path)?;
        std_fs::remove_file(path)?;
        Ok(())
    }
}

fn collect_entries(dir: &str, file_type: FileType, files: &mut Vec<FileEntry>) -> Result<()> {
    if let Ok(entries) = std_fs::read_dir(dir) {
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if let Some(name) = path.file_name().and_then(|n| n.to_str())
                && name.starts_with(SCRIPT_PREFIX)
            {
                let metadata = entry.metadata()?;
                files.push(FileEntry {
                    path: path.clone(),
                    name: name.to_string(),
                    file_type: file_type.clone(),
                    size: metadata.len(),
                    modified: metadata.modified()?,
                });
            }
        }
    }
    Ok(())
}

const MAX_SLUG_LEN: usize = 64;

/// Derives a filesystem-safe slug from the product name: lowercase ASCII
/// alphanumerics with runs of anything else collapsed to a single `-`.
/// Falls back to `guion` when nothing usable remains.
pub fn artifact_slug(product: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for c in product.trim().chars() {
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "guion".to_string()
    } else {
        slug
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    std_fs::create_dir_all(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = std_fs::metadata(path)?;
        let mut permissions = metadata.permissions();
        if permissions.mode() & 0o777 != 0o700 {
            permissions.set_mode(0o700);
            std_fs::set_permissions(path, permissions)?;
        }
    }

    Ok(())
}

fn ensure_managed_path(path: &Path) -> Result<()> {
    let canonical = path
        .canonicalize()
        .map_err(|_| Error::custom("Target file does not exist or cannot be resolved"))?;

    let script_base = Path::new(SCRIPTS_DIR).canonicalize().ok();
    let export_base = Path::new(EXPORTS_DIR).canonicalize().ok();

    let allowed = script_base
        .as_ref()
        .map(|base| canonical.starts_with(base))
        .unwrap_or(false)
        || export_base
            .as_ref()
            .map(|base| canonical.starts_with(base))
            .unwrap_or(false);

    if !allowed {
        return Err(Error::custom(
            "Refusing to operate on files outside managed script/export directories",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MAX_SLUG_LEN, artifact_slug};

    #[test]
    fn lowercases_and_joins_with_dashes() {
        assert_eq!(artifact_slug("Curso de Ventas 2.0"), "curso-de-ventas-2-0");
    }

    #[test]
    fn non_ascii_collapses_to_single_dash() {
        assert_eq!(artifact_slug("Máster  en   Copy"), "m-ster-en-copy");
    }

    #[test]
    fn empty_or_symbolic_name_falls_back() {
        assert_eq!(artifact_slug("   "), "guion");
        assert_eq!(artifact_slug("¿¡!?"), "guion");
    }

    #[test]
    fn caps_length() {
        let long = "a".repeat(MAX_SLUG_LEN * 2);
        assert!(artifact_slug(&long).len() <= MAX_SLUG_LEN);
    }
}
