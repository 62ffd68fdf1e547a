//! Output sink for rendered manifests

use crate::manifest::ManifestError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `text` to `path`, or to stdout when no path is given
///
/// An existing file is truncated. The file handle is closed on every path out
/// of this function.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), ManifestError> {
    match path {
        Some(path) => write_file(text, path),
        None => {
            let stdout = io::stdout();
            write_to(&mut stdout.lock(), text).map_err(|source| ManifestError::Output {
                path: PathBuf::from("<stdout>"),
                source,
            })
        }
    }
}

fn write_file(text: &str, path: &Path) -> Result<(), ManifestError> {
    let to_err = |source| ManifestError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_err)?;
    write_to(&mut file, text).map_err(to_err)?;

    info!(path = %path.display(), bytes = text.len(), "Manifest written");
    Ok(())
}

/// Write the full text and flush
pub fn write_to<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
