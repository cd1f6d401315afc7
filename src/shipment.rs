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

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ChaincodeError;

/// Identifier of a shipment; also the ledger key its record is stored under.
///
/// Ids coming from function arguments are parsed with [`FromStr`], which rejects
/// empty strings.
#[derive(Wrapper, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From, Display)]
#[wrapper(Deref)]
#[display(inner)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    pub fn ledger_key(&self) -> &str { &self.0 }
}

impl FromStr for ShipmentId {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ChaincodeError::InvalidShipmentId(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display("the stored shipment record is malformed: {0}")]
pub struct MalformedRecord(String);

/// Shipment tracked by the chaincode.
///
/// The ledger encoding is compact JSON with the fields in declaration order, e.g.
/// `{"CurrentOwner":"alice","MaximumTemperatureRecorded":10,"TemperatureThreshold":20}`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Shipment {
    pub current_owner: String,
    pub maximum_temperature_recorded: i64,
    pub temperature_threshold: i64,
}

impl Shipment {
    pub fn new(
        owner: impl Into<String>,
        maximum_temperature_recorded: i64,
        temperature_threshold: i64,
    ) -> Self {
        Shipment {
            current_owner: owner.into(),
            maximum_temperature_recorded,
            temperature_threshold,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        serde_json::json!({
            "CurrentOwner": self.current_owner,
            "MaximumTemperatureRecorded": self.maximum_temperature_recorded,
            "TemperatureThreshold": self.temperature_threshold,
        })
        .to_string()
        .into_bytes()
    }

    pub fn decode(data: impl AsRef<[u8]>) -> Result<Self, MalformedRecord> {
        serde_json::from_slice(data.as_ref()).map_err(|e| MalformedRecord(e.to_string()))
    }

    /// Whether the ownership may still change hands.
    pub fn is_transferable(&self) -> bool {
        self.maximum_temperature_recorded < self.temperature_threshold
    }

    pub fn breach(&self) -> Option<Breach> {
        if self.is_transferable() {
            return None;
        }
        Some(Breach {
            maximum_temperature_recorded: self.maximum_temperature_recorded,
            temperature_threshold: self.temperature_threshold,
        })
    }

    /// Hands the shipment over to `new_owner`, unless the recorded temperature has
    /// reached the threshold. A rejected transfer leaves the shipment untouched.
    pub fn transfer(mut self, new_owner: impl Into<String>) -> TransferOutcome {
        if let Some(breach) = self.breach() {
            return TransferOutcome::Rejected(breach);
        }
        self.current_owner = new_owner.into();
        TransferOutcome::Updated(self)
    }
}

/// Temperature condition which prevented an ownership transfer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Breach {
    pub maximum_temperature_recorded: i64,
    pub temperature_threshold: i64,
}

impl Display for Breach {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contract breached: maximum recorded temperature {} is not below the threshold {}",
            self.maximum_temperature_recorded, self.temperature_threshold
        )
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TransferOutcome {
    Updated(Shipment),
    Rejected(Breach),
}

impl TransferOutcome {
    pub fn is_updated(&self) -> bool { matches!(self, TransferOutcome::Updated(_)) }

    pub fn shipment(&self) -> Option<&Shipment> {
        match self {
            TransferOutcome::Updated(shipment) => Some(shipment),
            TransferOutcome::Rejected(_) => None,
        }
    }

    pub fn breach(&self) -> Option<Breach> {
        match self {
            TransferOutcome::Updated(_) => None,
            TransferOutcome::Rejected(breach) => Some(*breach),
        }
    }
}
