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

//! Host-provided ledger state, as seen by the chaincode.

use std::error::Error;
use std::fmt::Debug;

/// Brackets a single chaincode invocation, letting a host discard the writes
/// of a failed call.
pub trait StoreTransaction {
    type TransactionErr: Error;

    fn begin_transaction(&mut self) -> Result<(), Self::TransactionErr>;

    fn commit_transaction(&mut self) -> Result<(), Self::TransactionErr>;

    fn rollback_transaction(&mut self);
}

pub trait StateProvider: Debug + StateReadProvider + StateWriteProvider {}

pub trait StateReadProvider {
    type Error: Clone + Eq + Error;

    /// Returns the bytes stored under `key`, or `None` if the key was never
    /// written.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;
}

pub trait StateWriteProvider: StateReadProvider {
    /// Stores `value` under `key`, replacing whatever was stored there.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), Self::Error>;
}

impl<T: Debug + StateReadProvider + StateWriteProvider> StateProvider for T {}
