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

#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code,
    // missing_docs
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

// HOST ENTRY POINTS:
// init     :: State, [value] -> State            -- diagnostic key
// invoke   :: State, Method, [String] -> Payload -- mutating operations
// query    :: State, Method, [String] -> Payload -- read-only operations
//
// OPERATIONS:
// write          :: key, value -> ()
// read           :: key -> bytes
// startShipment  :: [id], owner, maxTemp, threshold -> Shipment
// transferOwner  :: [id], newOwner -> Updated(Shipment) | Rejected(Breach)
// readShipment   :: [id] -> Shipment

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;

mod config;
mod contract;
mod error;
mod memory;
mod method;
mod shipment;
mod state;

pub use config::{ChaincodeConfig, DEFAULT_DIAGNOSTIC_KEY, DEFAULT_SHIPMENT_ID};
pub use contract::{Chaincode, Operation, Payload, ShipmentChaincode};
pub use error::{Arity, ChaincodeError, EntryPoint, StateAccess};
pub use memory::{MemState, MemStateError};
pub use method::Method;
pub use shipment::{Breach, MalformedRecord, Shipment, ShipmentId, TransferOutcome};
pub use state::{StateProvider, StateReadProvider, StateWriteProvider, StoreTransaction};
