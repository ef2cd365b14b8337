//! JSON export of search results

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{Error, Result};

/// Write `value` as pretty-printed JSON to `path`, replacing any existing file
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush().map_err(|source| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })?;
    Ok(())
}
