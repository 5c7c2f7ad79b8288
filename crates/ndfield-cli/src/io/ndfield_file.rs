// crates/ndfield-cli/src/io/ndfield_file.rs

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ndfield_core::NdFieldDocument;
use tempfile::NamedTempFile;

/// Load and decode an NDField file.
pub fn load_ndfield(path: &str) -> Result<NdFieldDocument> {
    let bytes = std::fs::read(path).with_context(|| format!("read ndfield {path}"))?;
    let doc = NdFieldDocument::decode(&bytes).with_context(|| format!("decode ndfield {path}"))?;
    Ok(doc)
}

/// Encode and save a document as an NDField file.
pub fn save_ndfield(path: &str, doc: &NdFieldDocument) -> Result<()> {
    let bytes = doc.encode().with_context(|| format!("encode ndfield {path}"))?;
    write_atomic(path, &bytes)
}

/// Write through a temp file in the destination directory, renamed into
/// place only once every byte is on disk. On any error the temp file is
/// closed and removed, and `path` is left untouched.
pub fn write_atomic(path: &str, bytes: &[u8]) -> Result<()> {
    let dest = Path::new(path);
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("write {path}"))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync {path}"))?;
    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("persist {path}"))?;
    Ok(())
}
