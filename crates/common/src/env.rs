//! Environment/runtime helpers
//!
//! Sanity checks to ensure the storage file is usable at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the storage file exists, creating its parent directory and an empty
/// JSON array when missing. An existing file is left untouched.
pub async fn ensure_storage_file(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }

    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{} exists but is not a file", path.display())),
        Err(_) => {
            warn!(path = %path.display(), "storage file not found; initializing empty collection");
            tokio::fs::write(path, b"[]")
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", path.display()))?;
            info!(path = %path.display(), "storage file created");
            Ok(())
        }
    }
}
