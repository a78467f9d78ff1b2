use std::fmt::{self, Display};

use crate::consts::*;
use crate::errors::{OrfmapError, Result};

///
/// Typed view of one row of a PSM score table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PsmRecord {
    pub peptide: String,
    /// Raw protein ids, in the order the search engine listed them.
    pub protein_ids: Vec<String>,
    pub q_value: f64,
    pub posterior_error_prob: f64,
}

impl PsmRecord {
    pub fn has_composite_accession(&self) -> bool {
        self.protein_ids
            .iter()
            .any(|id| id.contains(COMPOSITE_ACCESSION_MARK))
    }

    pub fn claims_orf(&self) -> bool {
        self.protein_ids.iter().any(|id| id.contains("ORF"))
    }
}

///
/// Split a raw `proteinIds` cell into its ordered ids.
///
pub fn split_protein_ids(raw: &str) -> Vec<String> {
    raw.split(ID_DELIMITER).map(|s| s.trim().to_string()).collect()
}

///
/// Tab-separated PSM table held fully in memory.
///
/// Rows are kept as raw text so that columns this crate does not interpret
/// are written back untouched. Derived columns are added with
/// [PsmTable::insert_column], which hands back a new table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PsmTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PsmTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(OrfmapError::MalformedPsmTable(format!(
                    "Row {} has {} fields, header has {}",
                    i + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(PsmTable { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| {
            OrfmapError::MalformedPsmTable(format!("Missing required column: {}", name))
        })
    }

    ///
    /// All values of a column, in row order.
    ///
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    ///
    /// Raw protein ids per row, split on the id delimiter.
    ///
    pub fn protein_ids(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .column(PROTEIN_IDS_COL)?
            .into_iter()
            .map(split_protein_ids)
            .collect())
    }

    ///
    /// Parse every row into a [PsmRecord].
    ///
    pub fn records(&self) -> Result<Vec<PsmRecord>> {
        let peptide = self.require_column(PEPTIDE_COL)?;
        let ids = self.require_column(PROTEIN_IDS_COL)?;
        let q_value = self.require_column(Q_VALUE_COL)?;
        let pep = self.require_column(PEP_COL)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let parse_score = |idx: usize, name: &str| {
                    row[idx].trim().parse::<f64>().map_err(|_| {
                        OrfmapError::MalformedPsmTable(format!(
                            "Invalid {} on row {}: {:?}",
                            name,
                            i + 1,
                            row[idx]
                        ))
                    })
                };
                Ok(PsmRecord {
                    peptide: row[peptide].clone(),
                    protein_ids: split_protein_ids(&row[ids]),
                    q_value: parse_score(q_value, Q_VALUE_COL)?,
                    posterior_error_prob: parse_score(pep, PEP_COL)?,
                })
            })
            .collect()
    }

    ///
    /// Return a new table with `name` inserted at `position` (clamped to the
    /// number of columns). A column can only be added once.
    ///
    pub fn insert_column(mut self, position: usize, name: &str, values: Vec<String>) -> Result<Self> {
        if self.column_index(name).is_some() {
            return Err(OrfmapError::MalformedPsmTable(format!(
                "Column already present: {}",
                name
            )));
        }
        if values.len() != self.rows.len() {
            return Err(OrfmapError::MalformedPsmTable(format!(
                "Column {} has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        let position = position.min(self.columns.len());
        self.columns.insert(position, name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(position, value);
        }
        Ok(self)
    }

    ///
    /// Keep the rows whose mask entry is `true`.
    ///
    pub fn retain_rows(mut self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.rows.len() {
            return Err(OrfmapError::MalformedPsmTable(format!(
                "Row mask has {} entries for {} rows",
                mask.len(),
                self.rows.len()
            )));
        }
        let mut keep = mask.iter();
        self.rows.retain(|_| *keep.next().unwrap_or(&false));
        Ok(self)
    }
}

impl Display for PsmTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PsmTable with {} rows and {} columns.",
            self.len(),
            self.columns.len()
        )
    }
}
