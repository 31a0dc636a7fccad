use std::fs::File;
use std::path::{Path, PathBuf};

use cartera_types::{Roster, columns};

use crate::error::{Error, Result};

/// Candidate roster file names, tried in order.
pub const CANDIDATE_FILES: [&str; 2] = ["CLIENTES.csv", "CLIENTES.tsv"];

/// Delimited-table flavor of the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    fn delimiter(self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }

    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("tsv") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}

/// Handle to the backing roster file.
///
/// Location, load and save all go through this type so every save
/// rewrites exactly the file the roster was loaded from, in the same
/// delimiter flavor.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
    format: TableFormat,
}

impl RosterFile {
    /// Locate the roster in `dir`: the comma-separated primary name
    /// first, then the tab-separated fallback.
    pub fn locate(dir: &Path) -> Result<Self> {
        for name in CANDIDATE_FILES {
            let path = dir.join(name);
            if path.exists() {
                return Ok(Self::at(path));
            }
        }
        Err(Error::NotFound {
            dir: dir.to_path_buf(),
        })
    }

    /// Wrap an explicit path, inferring the delimiter from its extension.
    pub fn at(path: PathBuf) -> Self {
        Self {
            format: TableFormat::for_path(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> TableFormat {
        self.format
    }

    /// Load the full roster.
    ///
    /// After reading, a normalization pass creates every known column
    /// that the source file lacks, so callers can address all of them
    /// unconditionally: text columns default to the empty string, date
    /// columns to the empty cell (which reads back as an absent date).
    pub fn load(&self) -> Result<Roster> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.format.delimiter())
            .flexible(true)
            .from_path(&self.path)?;

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let mut roster = Roster::new(headers, rows);
        for column in columns::REQUIRED.iter().chain(columns::DATE_COLUMNS.iter()) {
            roster.ensure_column(column, "");
        }
        Ok(roster)
    }

    /// Write the whole roster back, replacing the file contents.
    ///
    /// Every save is a full-table overwrite; a second save after the
    /// first is the same operation again. Nothing here touches the
    /// in-memory roster, so a failed save leaves it edited but the file
    /// stale until the next successful save.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let file =
            File::create(&self.path).map_err(|err| Error::from_save_io(&self.path, err))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .from_writer(file);

        writer
            .write_record(roster.headers())
            .map_err(|err| Error::from_save_csv(&self.path, err))?;
        for row in roster.rows() {
            writer
                .write_record(row)
                .map_err(|err| Error::from_save_csv(&self.path, err))?;
        }
        writer
            .flush()
            .map_err(|err| Error::from_save_io(&self.path, err))?;
        Ok(())
    }
}
