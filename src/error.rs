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

use std::error::Error;

use crate::method::Method;
use crate::shipment::MalformedRecord;

/// Host entry point a function was called through.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub enum EntryPoint {
    #[display("invocation")]
    Invoke,

    #[display("query")]
    Query,
}

/// Direction of a state access.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
#[display(lowercase)]
pub enum StateAccess {
    Read,
    Write,
}

/// Number of arguments a function accepts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum Arity {
    #[display("{0}")]
    Exactly(usize),

    #[display("{0} or {1}")]
    Either(usize, usize),
}

impl Arity {
    pub fn admits(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::Either(a, b) => count == a || count == b,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ChaincodeError {
    /// incorrect number of arguments for {0}: expecting {1}, got {2}.
    InvalidArgumentCount(Method, Arity, usize),

    /// {0} must be a numeric string, got '{1}'.
    InvalidNumber(&'static str, String),

    /// shipment id must be a non-empty string, got '{0}'.
    InvalidShipmentId(String),

    /// no state is stored under key '{0}'.
    NotFound(String),

    /// failed to {0} state for key '{1}': {2}
    Storage(StateAccess, String, String),

    #[from]
    #[display(inner)]
    MalformedRecord(MalformedRecord),

    /// received unknown function {0}: {1}
    UnknownOperation(EntryPoint, String),
}

impl ChaincodeError {
    pub(crate) fn storage(access: StateAccess, key: &str, err: impl Error) -> Self {
        ChaincodeError::Storage(access, key.to_owned(), err.to_string())
    }

    /// Error payload returned to the host, in the form of `{"Error":"<message>"}`.
    pub fn payload(&self) -> Vec<u8> {
        serde_json::json!({ "Error": self.to_string() }).to_string().into_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arity() {
        assert!(Arity::Exactly(2).admits(2));
        assert!(!Arity::Exactly(2).admits(3));
        assert!(Arity::Either(3, 4).admits(4));
        assert!(!Arity::Either(3, 4).admits(0));
        assert_eq!(Arity::Either(1, 2).to_string(), "1 or 2");
    }

    #[test]
    fn messages() {
        assert_eq!(
            ChaincodeError::InvalidArgumentCount(Method::Write, Arity::Exactly(2), 1).to_string(),
            "incorrect number of arguments for write: expecting 2, got 1."
        );
        assert_eq!(
            ChaincodeError::UnknownOperation(EntryPoint::Query, s!("searchLogBog")).to_string(),
            "received unknown function query: searchLogBog"
        );
        assert_eq!(
            ChaincodeError::Storage(StateAccess::Read, s!("k"), s!("offline")).to_string(),
            "failed to read state for key 'k': offline"
        );
    }

    #[test]
    fn payload() {
        let err = ChaincodeError::NotFound(s!("BlueShipment"));
        assert_eq!(
            err.payload(),
            br#"{"Error":"no state is stored under key 'BlueShipment'."}"#
        );
    }
}
