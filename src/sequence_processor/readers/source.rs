use crate::error::ReaderError;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Compression detection needs this many leading bytes; shorter inputs are plain text.
const MAGIC_LEN: u64 = 5;

pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Open a possibly compressed input, transparently decompressing it.
pub fn open_input(
    path: &Path,
    buffer_capacity: usize,
) -> Result<BufReader<Box<dyn Read>>, ReaderError> {
    let raw: Box<dyn Read> = if is_stdin(path) {
        Box::new(io::stdin())
    } else {
        let file = File::open(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Box::new(file)
    };

    let inner = decompress(raw, path)?;
    Ok(BufReader::with_capacity(buffer_capacity.max(1), inner))
}

/// Hand `raw` to niffler, unless it ends before a compression magic number fits.
fn decompress(mut raw: Box<dyn Read>, path: &Path) -> Result<Box<dyn Read>, ReaderError> {
    let mut prefix = Vec::with_capacity(MAGIC_LEN as usize);
    raw.by_ref()
        .take(MAGIC_LEN)
        .read_to_end(&mut prefix)
        .map_err(|source| ReaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let short = (prefix.len() as u64) < MAGIC_LEN;
    let rejoined: Box<dyn Read> = Box::new(Cursor::new(prefix).chain(raw));
    if short {
        log::debug!("{}: shorter than a compression header, reading as plain text", path.display());
        return Ok(rejoined);
    }

    let (inner, compression) =
        niffler::get_reader(rejoined).map_err(|source| ReaderError::Decompress {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("{}: compression {:?}", path.display(), compression);
    Ok(inner)
}
