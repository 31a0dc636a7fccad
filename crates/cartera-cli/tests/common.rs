//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Days, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write_roster(&self, contents: &str) {
        fs::write(self.dir.join("CLIENTES.csv"), contents).expect("Failed to write roster");
    }

    pub fn write_tsv_roster(&self, contents: &str) {
        fs::write(self.dir.join("CLIENTES.tsv"), contents).expect("Failed to write roster");
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.join("cartera.toml"), contents).expect("Failed to write config");
    }

    pub fn read_roster(&self) -> String {
        fs::read_to_string(self.dir.join("CLIENTES.csv")).expect("Failed to read roster")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cartera").expect("Failed to find cartera binary");
        cmd.arg("--dir").arg(&self.dir);
        cmd
    }

    /// Roster with one stale client, one current one, an unmanaged pair,
    /// and "Ana Ruiz" duplicated across two salespeople. Dates are pinned
    /// relative to today so classification is deterministic.
    pub fn sample_roster(&self) {
        let today = Local::now().date_naive();
        let stale = today - Days::new(45);
        let fresh = today - Days::new(3);
        self.write_roster(&format!(
            "VENDEDOR,NOMBRE TERCERO,TELEFONO,EMAIL,CIUDAD,DIRECCION,fecha gestion,proxima gestion\n\
             Marta,Ana Ruiz,300 123 4567,ana@example.com,Bogotá,Cra 7 # 12-34,{stale},\n\
             Marta,Luis Prado,+57 301-555-0199,luis@example.com,Medellín,Cl 10 # 5-55,{fresh},\n\
             Pedro,Ana Ruiz,310 000 1111,,Cali,,,\n\
             Pedro,Carla Ortiz,,carla@example.com,Cali,Av 3N # 45-10,,\n"
        ));
    }
}
