use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::controllers::ports::file_presenter::PresentError;

/// Writes a file through a temporary sibling that is renamed into place only
/// after `write` succeeded and the data is flushed to disk. On failure the
/// temporary file is removed and `filepath` is left untouched.
pub fn write_atomically<F>(filepath: impl AsRef<Path>, write: F) -> Result<(), PresentError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), PresentError>,
{
    let filepath = filepath.as_ref();
    let directory = match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    file.as_file().sync_all()?;
    file.persist(filepath).map_err(|err| PresentError::Io(err.error))?;

    Ok(())
}
