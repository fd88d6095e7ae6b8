use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::SiteConfig;
use crate::config::CONFIG_FILE_NAME;

/// Write the built-in site config to `dest/_site.yml`.
///
/// Fails rather than overwrite an existing file.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> crate::Result<path::PathBuf> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> crate::Result<path::PathBuf> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let file = dest.join(CONFIG_FILE_NAME);
    create_file(&file, &SiteConfig::default().to_string())?;

    Ok(file)
}

fn create_file(path: &path::Path, content: &str) -> crate::Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}
