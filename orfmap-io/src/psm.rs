use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use log::{debug, info};

use orfmap_core::errors::{OrfmapError, Result};
use orfmap_core::models::PsmTable;
use orfmap_core::utils::{get_dynamic_reader, get_dynamic_writer};

///
/// Read a tab-separated PSM table from disk.
///
/// Rows that repeat the header line (left behind when per-run tables are
/// concatenated) are dropped.
///
/// # Arguments
/// - path: the path to the table
pub fn read_psm_table<T: AsRef<Path>>(path: T) -> Result<PsmTable> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(OrfmapError::MalformedPsmTable(format!(
            "No header found in {}",
            path.display()
        )));
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut repeated_headers = 0;
    for record in rdr.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if row == columns {
            repeated_headers += 1;
            continue;
        }
        rows.push(row);
    }

    if repeated_headers > 0 {
        debug!(
            "Dropped {} repeated header rows from {}",
            repeated_headers,
            path.display()
        );
    }

    let table = PsmTable::new(columns, rows)?;
    info!("Read {} from {}", table, path.display());
    Ok(table)
}

pub trait PsmWrite {
    ///
    /// Write the table to disk as tab-separated text
    /// (gzip'd when the path ends in `.gz`).
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl PsmWrite for PsmTable {
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let mut writer = get_dynamic_writer(path)?;

        let mut wtr = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(&mut writer);

        wtr.write_record(self.columns())?;
        for row in self.rows() {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        drop(wtr);
        writer.finish()?;

        info!("Wrote {} to {}", self, path.display());
        Ok(())
    }
}
