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

#![allow(dead_code)]

use chaincode::{Chaincode, MemState, Shipment, ShipmentChaincode, StateReadProvider};

pub fn args(list: &[&str]) -> Vec<String> { list.iter().map(|s| s.to_string()).collect() }

pub fn setup() -> (ShipmentChaincode, MemState) {
    let chaincode = ShipmentChaincode::new();
    let mut state = MemState::new();
    chaincode
        .init(&mut state, &args(&["hello world"]))
        .expect("init of a fresh state must succeed");
    (chaincode, state)
}

pub fn stored_shipment(state: &MemState, key: &str) -> Shipment {
    let data = state
        .get_state(key)
        .expect("in-memory state has no faults")
        .expect("shipment must be stored");
    Shipment::decode(data).expect("stored shipment must be well-formed")
}
