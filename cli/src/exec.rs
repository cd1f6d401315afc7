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
use std::io::stdout;
use std::slice;

use chaincode::{
    Chaincode, ChaincodeConfig, ChaincodeError, Payload, ShipmentChaincode, StoreTransaction,
};

use crate::cmd::{Args, Cmd};
use crate::store::FileState;

impl Args {
    pub fn exec(&self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    anyhow!("Unable to open configuration file '{}': {e}", path.display())
                })?;
                serde_yaml::from_reader(file)?
            }
            None => ChaincodeConfig::default(),
        };
        debug!("Using {config:?}");
        let chaincode = ShipmentChaincode::with_config(config);
        let mut state = FileState::load(&self.state)?;

        match &self.command {
            Cmd::Init { value } => transact(&mut state, |state| {
                chaincode.init(state, slice::from_ref(value))
            }),
            Cmd::Invoke { function, args } => {
                transact(&mut state, |state| chaincode.invoke(state, function, args))
            }
            Cmd::Query { function, args } => {
                let payload = chaincode.query(&state, function, args).map_err(failure)?;
                print_payload(payload);
                Ok(())
            }
            Cmd::Dump => {
                serde_yaml::to_writer(stdout(), &state.entries()?)?;
                Ok(())
            }
        }
    }
}

/// Runs a mutating call, persisting the state only if the call succeeds.
fn transact(
    state: &mut FileState,
    call: impl FnOnce(&mut FileState) -> Result<Payload, ChaincodeError>,
) -> anyhow::Result<()> {
    state.begin_transaction()?;
    match call(state) {
        Ok(payload) => {
            state.commit_transaction()?;
            print_payload(payload);
            Ok(())
        }
        Err(err) => {
            state.rollback_transaction();
            Err(failure(err))
        }
    }
}

fn failure(err: ChaincodeError) -> anyhow::Error {
    anyhow!("{}", String::from_utf8_lossy(&err.payload()))
}

fn print_payload(payload: Payload) {
    match payload {
        None => eprintln!("Success, no payload returned"),
        Some(data) => match String::from_utf8(data) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("Payload is not a UTF-8 string; printing it lossy");
                println!("{}", String::from_utf8_lossy(err.as_bytes()));
            }
        },
    }
}
