use std::io::Write;
use std::path::Path;

use log::info;

use orfmap_core::utils::{get_dynamic_writer, read_to_string};

use crate::errors::Result;

///
/// Concatenate FASTA files into `dst`, in order.
///
/// Some engines want the target and decoy databases in a single file.
///
pub fn concat_fastas<P: AsRef<Path>>(dst: &Path, sources: &[P]) -> Result<()> {
    let mut writer = get_dynamic_writer(dst)?;
    for source in sources {
        let text = read_to_string(source.as_ref())?;
        writer.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
    }
    writer.finish()?;

    info!("Concatenated {} FASTA files into {}", sources.len(), dst.display());
    Ok(())
}
