use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::info;

use orfmap_core::utils::{get_dynamic_reader, get_dynamic_writer};

use crate::database::DatabaseType;
use crate::errors::{DecoyError, Result};

const BUNDLED_CONTAMINANTS: &str = include_str!("../data/contaminants.fasta");

/// Residue codes standing for more than one amino acid.
const AMBIGUOUS_RESIDUES: [u8; 3] = [b'B', b'X', b'Z'];

///
/// Reverse every residue except the last one, which stays at the end.
///
/// ```
/// use orfmap_decoy::reverse_keep_cterm;
/// assert_eq!(reverse_keep_cterm(b"MPEPTIDEK"), b"EDITPEPMK".to_vec());
/// ```
pub fn reverse_keep_cterm(seq: &[u8]) -> Vec<u8> {
    match seq.split_last() {
        Some((cterm, rest)) => {
            let mut decoy: Vec<u8> = rest.iter().rev().copied().collect();
            decoy.push(*cterm);
            decoy
        }
        None => Vec::new(),
    }
}

pub fn strip_ambiguous(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .copied()
        .filter(|aa| !AMBIGUOUS_RESIDUES.contains(aa))
        .collect()
}

fn read_records<R: Read>(reader: R, source: &str) -> Result<Vec<fasta::Record>> {
    fasta::Reader::new(reader)
        .records()
        .map(|record| {
            let record = record?;
            record
                .check()
                .map_err(|e| DecoyError::InvalidRecord(source.to_string(), e.to_string()))?;
            Ok(record)
        })
        .collect()
}

///
/// Builds the decoy database for one target database.
///
pub struct DecoyGenerator {
    db_type: DatabaseType,
    contaminants: Vec<fasta::Record>,
}

impl DecoyGenerator {
    ///
    /// Create a generator appending the bundled contaminant library.
    ///
    pub fn new(db_type: DatabaseType) -> Result<Self> {
        let contaminants = read_records(BUNDLED_CONTAMINANTS.as_bytes(), "bundled contaminants")?;
        Ok(DecoyGenerator {
            db_type,
            contaminants,
        })
    }

    ///
    /// Replace the contaminant library with the records of a FASTA file.
    ///
    pub fn with_contaminants<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path)?;
        self.contaminants = read_records(reader, &path.display().to_string())?;
        Ok(self)
    }

    pub fn contaminants(&self) -> &[fasta::Record] {
        &self.contaminants
    }

    ///
    /// Decoys for every target protein, numbered from 1, followed by the
    /// contaminants with ambiguous residues stripped.
    ///
    /// # Arguments
    /// - targets: records of the target protein database
    pub fn generate(&self, targets: &[fasta::Record]) -> Vec<fasta::Record> {
        let decoys = targets.iter().enumerate().map(|(i, target)| {
            let id = format!("{}_decoy_Protein_{}", self.db_type, i + 1);
            fasta::Record::with_attrs(&id, None, &reverse_keep_cterm(target.seq()))
        });

        let contaminants = self
            .contaminants
            .iter()
            .map(|c| fasta::Record::with_attrs(c.id(), None, &strip_ambiguous(c.seq())));

        decoys.chain(contaminants).collect()
    }

    ///
    /// Read a target database and write its decoy database.
    ///
    /// Parent directories of `output` are created. Returns the number of
    /// records written.
    ///
    /// # Arguments
    /// - database: path to the (optionally gzip'd) target protein FASTA
    /// - output: path of the decoy FASTA to write
    pub fn write<P: AsRef<Path>, Q: AsRef<Path>>(&self, database: P, output: Q) -> Result<usize> {
        let database = database.as_ref();
        let output = output.as_ref();

        let targets = read_records(
            get_dynamic_reader(database)?,
            &database.display().to_string(),
        )?;
        let records = self.generate(&targets);

        let mut file = get_dynamic_writer(output)?;
        let mut writer = fasta::Writer::new(&mut file);
        for record in records.iter() {
            writer.write_record(record)?;
        }
        writer.flush()?;
        drop(writer);
        file.finish()?;

        info!(
            "Wrote {} decoys and {} contaminants to {}",
            targets.len(),
            self.contaminants.len(),
            output.display()
        );
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;
    use tempfile::tempdir;

    use crate::database::decoy_path;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/fasta")
            .join(file_name)
    }

    fn load(path: &Path) -> Vec<fasta::Record> {
        read_records(get_dynamic_reader(path).unwrap(), "test").unwrap()
    }

    #[rstest]
    #[case(b"M".to_vec())]
    #[case(b"MK".to_vec())]
    #[case(b"MPEPTIDEK".to_vec())]
    #[case(b"MTDDPGSGFTTVWNAVVSELNGDPKVDDGPR".to_vec())]
    fn test_cterm_is_kept(#[case] seq: Vec<u8>) {
        let decoy = reverse_keep_cterm(&seq);
        let n = seq.len();

        assert_eq!(decoy.len(), n);
        assert_eq!(decoy[n - 1], seq[n - 1]);

        let mut head = seq[..n - 1].to_vec();
        head.reverse();
        assert_eq!(decoy[..n - 1].to_vec(), head);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn cterm_is_kept_for_any_sequence(seq in prop::collection::vec(any::<u8>(), 1..200)) {
            let decoy = reverse_keep_cterm(&seq);
            let n = seq.len();

            prop_assert_eq!(decoy.len(), n);
            prop_assert_eq!(decoy[n - 1], seq[n - 1]);
            let head: Vec<u8> = seq[..n - 1].iter().rev().copied().collect();
            prop_assert_eq!(&decoy[..n - 1], head.as_slice());
        }
    }

    #[rstest]
    fn test_empty_sequence() {
        assert!(reverse_keep_cterm(b"").is_empty());
    }

    #[rstest]
    fn test_strip_ambiguous() {
        assert_eq!(strip_ambiguous(b"AXBKZR"), b"AKR".to_vec());
    }

    #[rstest]
    fn test_bundled_contaminants() {
        let generator = DecoyGenerator::new(DatabaseType::Genome).unwrap();
        assert!(!generator.contaminants().is_empty());
        assert!(generator.contaminants().iter().any(|c| c.id().contains("TRYP_PIG")));
    }

    #[rstest]
    fn test_generate() {
        let targets = load(&get_test_path("targets.fasta"));
        let generator = DecoyGenerator::new(DatabaseType::Transcriptome)
            .unwrap()
            .with_contaminants(get_test_path("contaminants.fasta"))
            .unwrap();

        let records = generator.generate(&targets);
        assert_eq!(records.len(), targets.len() + 2);

        assert_eq!(records[0].id(), "Transcriptome_decoy_Protein_1");
        assert_eq!(records[2].id(), "Transcriptome_decoy_Protein_3");
        assert_eq!(records[0].seq(), reverse_keep_cterm(targets[0].seq()).as_slice());

        // contaminant ids are kept, ambiguous residues are not
        let contaminant = &records[targets.len() + 1];
        assert_eq!(contaminant.id(), "CON_AMBIGUOUS");
        assert_eq!(contaminant.seq(), b"MKRLLEKR");
    }

    #[rstest]
    fn test_write_decoys() {
        let dir = tempdir().unwrap();
        let output = decoy_path(dir.path(), DatabaseType::Genome);

        let generator = DecoyGenerator::new(DatabaseType::Genome).unwrap();
        let written = generator.write(get_test_path("targets.fasta"), &output).unwrap();

        let records = load(&output);
        assert_eq!(records.len(), written);
        assert_eq!(records[0].id(), "Genome_decoy_Protein_1");
        assert!(
            records
                .iter()
                .all(|r| !r.seq().iter().any(|aa| AMBIGUOUS_RESIDUES.contains(aa)))
        );
    }

    #[rstest]
    fn test_missing_database() {
        let dir = tempdir().unwrap();
        let generator = DecoyGenerator::new(DatabaseType::Genome).unwrap();
        let result = generator.write(get_test_path("missing.fasta"), dir.path().join("out.fasta"));
        assert!(matches!(result, Err(DecoyError::Core(_))));
    }
}
