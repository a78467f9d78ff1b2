use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::errors::{OrfmapError, Result};

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)
        .map_err(|e| OrfmapError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Writer returned by [get_dynamic_writer].
///
/// Call [DynamicWriter::finish] once done: the gzip trailer and the last
/// buffered bytes are only written there, and any error doing so is
/// returned instead of being lost on drop.
///
pub enum DynamicWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl DynamicWriter {
    pub fn finish(self) -> Result<()> {
        match self {
            DynamicWriter::Plain(mut file) => file.flush()?,
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            DynamicWriter::Plain(file) => file.write(buf),
            DynamicWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(file) => file.flush(),
            DynamicWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

///
/// Get a writer for a file, gzip compressing when the path ends in `.gz`.
/// Parent directories are created as needed.
///
/// # Arguments
///
/// - path: path to the file to write
///
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let writer = match is_gzipped(path) {
        true => DynamicWriter::Gzip(GzEncoder::new(file, Compression::default())),
        false => DynamicWriter::Plain(file),
    };

    Ok(writer)
}

///
/// Read a whole (optionally gzip'd) text file into memory.
///
pub fn read_to_string(path: &Path) -> Result<String> {
    let mut reader = get_dynamic_reader(path)?;
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}
