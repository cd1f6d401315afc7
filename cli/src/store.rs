// Shipment chaincode: ledger key/value state and temperature-guarded shipment ownership
//
// SPDX-License-Identifier: Apache-2.0
//
// Copyright (C) 2016-2026 Shipment Chaincode Developers.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chaincode::{
    MemState, MemStateError, StateReadProvider, StateWriteProvider, StoreTransaction,
};
use indexmap::IndexMap;

#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum FileStateError {
    /// unable to access the state file: {0}
    #[from]
    Io(io::Error),

    /// the state file is not valid YAML: {0}
    #[from]
    Yaml(serde_yaml::Error),

    /// value stored under key '{0}' is not a UTF-8 string and can't be saved.
    NonUtf8(String),

    #[from]
    #[display(inner)]
    State(MemStateError),
}

/// Ledger state kept in a YAML file as a map of keys to string values.
///
/// The whole file is loaded up front; changes are written back only when a
/// transaction commits.
#[derive(Debug)]
pub struct FileState {
    path: PathBuf,
    state: MemState,
}

impl FileState {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FileStateError> {
        let path = path.as_ref().to_owned();
        let entries: IndexMap<String, String> = match File::open(&path) {
            Ok(file) => serde_yaml::from_reader(file)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => none!(),
            Err(err) => return Err(err.into()),
        };
        debug!("loaded {} state entries from '{}'", entries.len(), path.display());
        let state = MemState::with(entries.into_iter().map(|(k, v)| (k, v.into_bytes())));
        Ok(Self { path, state })
    }

    pub fn entries(&self) -> Result<IndexMap<String, String>, FileStateError> {
        self.state
            .iter()
            .map(|(key, value)| {
                String::from_utf8(value.to_vec())
                    .map(|value| (key.to_owned(), value))
                    .map_err(|_| FileStateError::NonUtf8(key.to_owned()))
            })
            .collect()
    }

    pub fn save(&self) -> Result<(), FileStateError> {
        let entries = self.entries()?;
        let file = File::create(&self.path)?;
        serde_yaml::to_writer(file, &entries)?;
        debug!("saved {} state entries to '{}'", entries.len(), self.path.display());
        Ok(())
    }
}

impl StoreTransaction for FileState {
    type TransactionErr = FileStateError;

    fn begin_transaction(&mut self) -> Result<(), Self::TransactionErr> {
        Ok(self.state.begin_transaction()?)
    }

    fn commit_transaction(&mut self) -> Result<(), Self::TransactionErr> {
        self.state.commit_transaction()?;
        self.save()
    }

    fn rollback_transaction(&mut self) { self.state.rollback_transaction() }
}

impl StateReadProvider for FileState {
    type Error = MemStateError;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        self.state.get_state(key)
    }
}

impl StateWriteProvider for FileState {
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), Self::Error> {
        self.state.put_state(key, value)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shipcc-{}-{name}.yaml", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file() {
        let path = temp_path("missing");
        let state = FileState::load(&path).unwrap();
        assert_eq!(state.get_state("a"), Ok(None));
        assert!(!path.exists());
    }

    #[test]
    fn commit_persists() {
        let path = temp_path("commit");
        let mut state = FileState::load(&path).unwrap();
        state.begin_transaction().unwrap();
        state.put_state("b", b"2".to_vec()).unwrap();
        state.put_state("a", b"1".to_vec()).unwrap();
        state.commit_transaction().unwrap();

        let state = FileState::load(&path).unwrap();
        assert_eq!(state.get_state("a"), Ok(Some(b"1".to_vec())));
        assert_eq!(state.entries().unwrap().keys().collect::<Vec<_>>(), vec!["b", "a"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rollback_discards() {
        let path = temp_path("rollback");
        let mut state = FileState::load(&path).unwrap();
        state.begin_transaction().unwrap();
        state.put_state("a", b"1".to_vec()).unwrap();
        state.rollback_transaction();
        assert_eq!(state.get_state("a"), Ok(None));
        assert!(!path.exists());
    }

    #[test]
    fn non_utf8() {
        let path = temp_path("binary");
        let mut state = FileState::load(&path).unwrap();
        state.put_state("bin", vec![0xFF, 0xFE]).unwrap();
        assert!(matches!(state.save(), Err(FileStateError::NonUtf8(key)) if key == "bin"));
    }
}
