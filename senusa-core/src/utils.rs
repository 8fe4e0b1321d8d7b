use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::errors::VariantFileError;

/// Path value that stands for standard input.
pub const STDIN_PATH: &str = "-";

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == STDIN_PATH {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

///
/// Read the whole content of a (possibly gzipped) file, or stdin, as text.
///
/// The content is returned verbatim: no line ending normalisation happens here.
///
pub fn read_text(file_path_str: &str) -> Result<String, VariantFileError> {
    let mut reader = get_dynamic_reader_w_stdin(file_path_str)
        .map_err(|e| VariantFileError::FileReadError(format!("{:#}", e)))?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    String::from_utf8(bytes).map_err(|_| VariantFileError::InvalidEncoding(file_path_str.to_string()))
}
