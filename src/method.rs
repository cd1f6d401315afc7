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

use std::str::FromStr;

use crate::error::EntryPoint;

/// Chaincode function name, as passed by the host.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub enum Method {
    #[display("init")]
    Init,

    #[display("write")]
    Write,

    #[display("read")]
    Read,

    #[display("startShipment")]
    StartShipment,

    #[display("transferOwner")]
    TransferOwner,

    #[display("readShipment")]
    ReadShipment,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Init,
        Method::Write,
        Method::Read,
        Method::StartShipment,
        Method::TransferOwner,
        Method::ReadShipment,
    ];

    /// Entry point through which the function may be called.
    pub fn entry_point(self) -> EntryPoint {
        match self {
            Method::Init | Method::Write | Method::StartShipment | Method::TransferOwner => {
                EntryPoint::Invoke
            }
            Method::Read | Method::ReadShipment => EntryPoint::Query,
        }
    }

    pub fn is_read_only(self) -> bool { self.entry_point() == EntryPoint::Query }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.to_string() == s)
            .ok_or_else(|| s.to_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        for method in Method::ALL {
            assert_eq!(Method::from_str(&method.to_string()), Ok(method));
        }
        assert_eq!(Method::from_str("StartShipment"), Err(s!("StartShipment")));
        assert_eq!(Method::from_str("addNewShipment"), Err(s!("addNewShipment")));
    }

    #[test]
    fn entry_points() {
        assert!(Method::Read.is_read_only());
        assert!(Method::ReadShipment.is_read_only());
        assert_eq!(Method::Init.entry_point(), EntryPoint::Invoke);
        assert_eq!(Method::TransferOwner.entry_point(), EntryPoint::Invoke);
    }
}
