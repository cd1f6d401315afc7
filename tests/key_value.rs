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

#[macro_use]
extern crate amplify;

mod utils;

use chaincode::{
    Arity, Chaincode, ChaincodeError, EntryPoint, MemState, Method, ShipmentChaincode,
    StateAccess, StateReadProvider, DEFAULT_DIAGNOSTIC_KEY,
};
use rand::distr::{Alphanumeric, SampleString};
use rand::{rng, Rng};
use utils::{args, setup};

#[test]
fn write_read() {
    let (chaincode, mut state) = setup();
    let mut rng = rng();
    for _ in 0..100 {
        let (key_len, value_len) = (rng.random_range(1..16), rng.random_range(0..64));
        let key = Alphanumeric.sample_string(&mut rng, key_len);
        let value = Alphanumeric.sample_string(&mut rng, value_len);
        let payload = chaincode
            .invoke(&mut state, "write", &args(&[key.as_str(), value.as_str()]))
            .unwrap();
        assert_eq!(payload, None);
        let payload = chaincode.query(&state, "read", &args(&[key.as_str()])).unwrap();
        assert_eq!(payload, Some(value.into_bytes()));
    }
}

#[test]
fn overwrite() {
    let (chaincode, mut state) = setup();
    chaincode.invoke(&mut state, "write", &args(&["k", "1"])).unwrap();
    chaincode.invoke(&mut state, "write", &args(&["k", "2"])).unwrap();
    assert_eq!(chaincode.query(&state, "read", &args(&["k"])), Ok(Some(b"2".to_vec())));
}

#[test]
fn init() {
    let chaincode = ShipmentChaincode::new();
    let mut state = MemState::new();
    assert_eq!(chaincode.init(&mut state, &args(&["hello"])), Ok(None));
    assert_eq!(state.get_state(DEFAULT_DIAGNOSTIC_KEY), Ok(Some(b"hello".to_vec())));

    assert_eq!(chaincode.invoke(&mut state, "init", &args(&["again"])), Ok(None));
    assert_eq!(
        chaincode.query(&state, "read", &args(&[DEFAULT_DIAGNOSTIC_KEY])),
        Ok(Some(b"again".to_vec()))
    );

    assert_eq!(
        chaincode.init(&mut state, &args(&["a", "b"])),
        Err(ChaincodeError::InvalidArgumentCount(Method::Init, Arity::Exactly(1), 2))
    );
}

#[test]
fn argument_count() {
    let (chaincode, mut state) = setup();
    assert_eq!(
        chaincode.invoke(&mut state, "write", &args(&["k"])),
        Err(ChaincodeError::InvalidArgumentCount(Method::Write, Arity::Exactly(2), 1))
    );
    assert_eq!(
        chaincode.invoke(&mut state, "write", &args(&["k", "v", "w"])),
        Err(ChaincodeError::InvalidArgumentCount(Method::Write, Arity::Exactly(2), 3))
    );
    assert_eq!(
        chaincode.query(&state, "read", &[]),
        Err(ChaincodeError::InvalidArgumentCount(Method::Read, Arity::Exactly(1), 0))
    );
}

#[test]
fn missing_key() {
    let (chaincode, state) = setup();
    let err = chaincode.query(&state, "read", &args(&["nothing"])).unwrap_err();
    assert_eq!(err, ChaincodeError::NotFound(s!("nothing")));
    assert_eq!(err.payload(), br#"{"Error":"no state is stored under key 'nothing'."}"#);
}

#[test]
fn storage_faults() {
    let (chaincode, mut state) = setup();
    chaincode.invoke(&mut state, "write", &args(&["k", "v"])).unwrap();

    state.inject_fault(StateAccess::Write);
    assert!(matches!(
        chaincode.invoke(&mut state, "write", &args(&["k", "w"])),
        Err(ChaincodeError::Storage(StateAccess::Write, _, _))
    ));

    state.inject_fault(StateAccess::Read);
    let err = chaincode.query(&state, "read", &args(&["k"])).unwrap_err();
    assert!(matches!(err, ChaincodeError::Storage(StateAccess::Read, ref key, _) if key == "k"));

    state.clear_faults();
    assert_eq!(chaincode.query(&state, "read", &args(&["k"])), Ok(Some(b"v".to_vec())));
}

#[test]
fn unknown_functions() {
    let (chaincode, mut state) = setup();
    assert_eq!(
        chaincode.invoke(&mut state, "read", &args(&["k"])),
        Err(ChaincodeError::UnknownOperation(EntryPoint::Invoke, s!("read")))
    );
    assert_eq!(
        chaincode.invoke(&mut state, "addNewShipment", &[]),
        Err(ChaincodeError::UnknownOperation(EntryPoint::Invoke, s!("addNewShipment")))
    );
    let err = chaincode.query(&state, "searchLogBog", &[]).unwrap_err();
    assert_eq!(err.to_string(), "received unknown function query: searchLogBog");
    assert_eq!(
        err.payload(),
        br#"{"Error":"received unknown function query: searchLogBog"}"#
    );
}
