use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

use orfmap::coords::KeepMode;
use orfmap::coords::stage::{genome_coordinates, transcript_coordinates, unique_peptides};
use orfmap::core::PipelineConfig;
use orfmap::core::consts::{GENOME_COORDINATES_COL, UNIQUE_PEPTIDE_COL};
use orfmap::decoy::{DatabaseType, DecoyGenerator, decoy_path};
use orfmap::io::read_psm_table;
use orfmap::search::{SearchEngine, SearchError, SearchTask, concat_fastas, plan_tasks, run_search};

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from("../tests/data")
}

#[fixture]
fn config(path_to_data: PathBuf) -> PipelineConfig {
    PipelineConfig::try_from(path_to_data.join("orfmap.toml").as_path()).unwrap()
}

struct RecordingEngine {
    seen: Mutex<Vec<SearchTask>>,
}

impl SearchEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
    }

    fn run(&self, task: &SearchTask) -> Result<(), SearchError> {
        fs::write(task.output.with_extension("pin"), task.to_string())?;
        self.seen.lock().unwrap().push(task.clone());
        Ok(())
    }
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_genome_run(path_to_data: PathBuf) -> anyhow::Result<()> {
        let dir = tempdir()?;
        let outdir = dir.path();
        let config = PipelineConfig::default();

        let coordinates = outdir.join("Genome").join("genome_coordinates.txt");
        genome_coordinates(
            &path_to_data.join("psm/genome_psms.txt"),
            &path_to_data.join("annotation/reference.gff"),
            &coordinates,
            &config,
        )?;

        let unique = outdir.join("Genome").join("unique_peptides.txt");
        unique_peptides(&coordinates, &unique, KeepMode::Unique, &config)?;

        let table = read_psm_table(&unique)?;
        assert_eq!(table.len(), 2);
        assert!(
            table
                .column(UNIQUE_PEPTIDE_COL)?
                .iter()
                .all(|v| *v == "True")
        );
        assert_eq!(table.column(GENOME_COORDINATES_COL)?, vec!["398-493", "398-493,398-493"]);
        Ok(())
    }

    #[rstest]
    fn test_transcriptome_run_with_config(path_to_data: PathBuf, config: PipelineConfig) -> anyhow::Result<()> {
        let dir = tempdir()?;
        let coordinates = dir.path().join("transcriptome_coordinates.txt.gz");

        transcript_coordinates(
            &path_to_data.join("psm/transcriptome_psms.txt"),
            &path_to_data.join("annotation/transcripts.gtf"),
            &path_to_data.join("annotation/reference.gff"),
            &coordinates,
            &config,
        )?;

        // the configured thresholds are tighter than the defaults
        let unique = unique_peptides(
            &coordinates,
            &dir.path().join("unique_peptides.txt"),
            KeepMode::All,
            &config,
        )?;

        assert_eq!(unique.column("PSMId")?, vec!["run1_3_2_1", "run1_4_2_1", "run1_5_2_1", "run1_8_2_1"]);
        assert_eq!(unique.column(UNIQUE_PEPTIDE_COL)?, vec!["True", "True", "False", "True"]);
        Ok(())
    }

    #[rstest]
    fn test_decoys_and_search(path_to_data: PathBuf, config: PipelineConfig) -> anyhow::Result<()> {
        let dir = tempdir()?;
        let outdir = dir.path();

        let target = path_to_data.join("fasta/targets.fasta");
        let decoy = decoy_path(outdir, DatabaseType::Genome);
        DecoyGenerator::new(DatabaseType::Genome)?.write(&target, &decoy)?;
        assert!(decoy.ends_with(Path::new("Genome/Percolator/Genome_decoy.fasta")));

        let combined = outdir.join("Genome_comet_database.fasta");
        concat_fastas(&combined, &[&target, &decoy])?;
        let text = fs::read_to_string(&combined)?;
        assert!(text.starts_with(">gORF__1_398-493_"));
        assert!(text.contains(">Genome_decoy_Protein_3\n"));

        let spectra = vec![outdir.join("run1.mzML"), outdir.join("run2.mzML")];
        let tasks = plan_tasks(&spectra, &target, &decoy, outdir);
        let engine = RecordingEngine {
            seen: Mutex::new(Vec::new()),
        };
        run_search(&engine, &tasks, config.processes)?;

        // every search has finished once run_search returns
        assert_eq!(engine.seen.lock().unwrap().len(), 4);
        assert!(outdir.join("run2_decoy.pin").exists());
        Ok(())
    }
}
