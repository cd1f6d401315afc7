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

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::StateAccess;
use crate::state::{StateReadProvider, StateWriteProvider, StoreTransaction};

#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum MemStateError {
    /// state {0} for key '{1}' is unavailable.
    Unavailable(StateAccess, String),

    /// transaction is already in progress.
    NestedTransaction,

    /// no transaction is in progress.
    NoTransaction,
}

/// In-memory ledger state, keeping keys in the order they were first written.
///
/// Useful for tests and for local hosts which load and persist the whole state
/// at once. Faults may be injected to emulate an unavailable host store.
#[derive(Getters, Clone, PartialEq, Eq, Debug, Default)]
pub struct MemState {
    entries: IndexMap<String, Vec<u8>>,
    #[getter(skip)]
    faults: BTreeSet<StateAccess>,
    #[getter(skip)]
    snapshot: Option<IndexMap<String, Vec<u8>>>,
}

impl MemState {
    pub fn new() -> Self { Self::default() }

    pub fn with(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self { entries: entries.into_iter().collect(), ..default!() }
    }

    pub fn inject_fault(&mut self, fault: StateAccess) { self.faults.insert(fault); }

    pub fn clear_faults(&mut self) { self.faults.clear(); }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains_key(&self, key: &str) -> bool { self.entries.contains_key(key) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn check(&self, fault: StateAccess, key: &str) -> Result<(), MemStateError> {
        if self.faults.contains(&fault) {
            return Err(MemStateError::Unavailable(fault, key.to_owned()));
        }
        Ok(())
    }
}

impl StoreTransaction for MemState {
    type TransactionErr = MemStateError;

    fn begin_transaction(&mut self) -> Result<(), Self::TransactionErr> {
        if self.snapshot.is_some() {
            return Err(MemStateError::NestedTransaction);
        }
        self.snapshot = Some(self.entries.clone());
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<(), Self::TransactionErr> {
        self.snapshot.take().map(|_| ()).ok_or(MemStateError::NoTransaction)
    }

    fn rollback_transaction(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.entries = snapshot;
        }
    }
}

impl StateReadProvider for MemState {
    type Error = MemStateError;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        self.check(StateAccess::Read, key)?;
        Ok(self.entries.get(key).cloned())
    }
}

impl StateWriteProvider for MemState {
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), Self::Error> {
        self.check(StateAccess::Write, key)?;
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}
