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

use crate::config::ChaincodeConfig;
use crate::error::{Arity, ChaincodeError, EntryPoint, StateAccess};
use crate::method::Method;
use crate::shipment::{Shipment, ShipmentId, TransferOutcome};
use crate::state::{StateReadProvider, StateWriteProvider};

/// Bytes returned to the host; `None` stands for a null payload.
pub type Payload = Option<Vec<u8>>;

/// Host-facing interface of a chaincode.
///
/// A host calls `init` once when the chaincode is deployed, and then `invoke`
/// for transactions which may modify the state and `query` for read-only
/// lookups. Each call is independent: the chaincode keeps nothing between calls
/// and sees the ledger only through the provided state accessor.
pub trait Chaincode {
    fn init<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        args: &[String],
    ) -> Result<Payload, ChaincodeError>;

    fn invoke<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        function: &str,
        args: &[String],
    ) -> Result<Payload, ChaincodeError>;

    fn query<S: StateReadProvider>(
        &self,
        stub: &S,
        function: &str,
        args: &[String],
    ) -> Result<Payload, ChaincodeError>;
}

/// Function call with its arguments parsed and validated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operation {
    Init { value: String },
    Write { key: String, value: String },
    Read { key: String },
    StartShipment { id: ShipmentId, shipment: Shipment },
    TransferOwner { id: ShipmentId, new_owner: String },
    ReadShipment { id: ShipmentId },
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::Init { .. } => Method::Init,
            Operation::Write { .. } => Method::Write,
            Operation::Read { .. } => Method::Read,
            Operation::StartShipment { .. } => Method::StartShipment,
            Operation::TransferOwner { .. } => Method::TransferOwner,
            Operation::ReadShipment { .. } => Method::ReadShipment,
        }
    }

    /// Validates the arguments of a function call.
    ///
    /// Shipment functions take the shipment id as an optional first argument;
    /// when it is omitted, the configured default shipment is used.
    pub fn parse(
        method: Method,
        args: &[String],
        config: &ChaincodeConfig,
    ) -> Result<Self, ChaincodeError> {
        let default_id = || ShipmentId::from_str(&config.default_shipment);
        Ok(match method {
            Method::Init => {
                check_arity(method, Arity::Exactly(1), args)?;
                Operation::Init { value: args[0].clone() }
            }
            Method::Write => {
                check_arity(method, Arity::Exactly(2), args)?;
                Operation::Write { key: args[0].clone(), value: args[1].clone() }
            }
            Method::Read => {
                check_arity(method, Arity::Exactly(1), args)?;
                Operation::Read { key: args[0].clone() }
            }
            Method::StartShipment => {
                check_arity(method, Arity::Either(3, 4), args)?;
                let (id, args) = match args {
                    [id, rest @ ..] if rest.len() == 3 => (ShipmentId::from_str(id)?, rest),
                    _ => (default_id()?, args),
                };
                let max = parse_number("MaximumTemperatureRecorded", &args[1])?;
                let threshold = parse_number("TemperatureThreshold", &args[2])?;
                Operation::StartShipment { id, shipment: Shipment::new(&args[0], max, threshold) }
            }
            Method::TransferOwner => {
                check_arity(method, Arity::Either(1, 2), args)?;
                match args {
                    [id, new_owner] => Operation::TransferOwner {
                        id: ShipmentId::from_str(id)?,
                        new_owner: new_owner.clone(),
                    },
                    _ => Operation::TransferOwner { id: default_id()?, new_owner: args[0].clone() },
                }
            }
            Method::ReadShipment => {
                check_arity(method, Arity::Either(0, 1), args)?;
                let id = match args.first() {
                    Some(id) => ShipmentId::from_str(id)?,
                    None => default_id()?,
                };
                Operation::ReadShipment { id }
            }
        })
    }
}

fn check_arity(method: Method, arity: Arity, args: &[String]) -> Result<(), ChaincodeError> {
    if !arity.admits(args.len()) {
        return Err(ChaincodeError::InvalidArgumentCount(method, arity, args.len()));
    }
    Ok(())
}

fn parse_number(field: &'static str, value: &str) -> Result<i64, ChaincodeError> {
    i64::from_str(value).map_err(|_| ChaincodeError::InvalidNumber(field, value.to_owned()))
}

/// Chaincode keeping free-form key/value pairs and temperature-guarded shipments.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ShipmentChaincode {
    config: ChaincodeConfig,
}

impl ShipmentChaincode {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: ChaincodeConfig) -> Self { Self { config } }

    pub fn config(&self) -> &ChaincodeConfig { &self.config }

    /// Resolves a function name against the functions callable through `entry`.
    pub fn resolve(&self, entry: EntryPoint, function: &str) -> Result<Method, ChaincodeError> {
        match Method::from_str(function) {
            Ok(method) if method.entry_point() == entry => Ok(method),
            _ => {
                warn!("{entry} did not find function {function}");
                Err(ChaincodeError::UnknownOperation(entry, function.to_owned()))
            }
        }
    }

    /// Executes an operation which may modify the state.
    pub fn execute<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        operation: Operation,
    ) -> Result<Payload, ChaincodeError> {
        match operation {
            Operation::Init { value } => {
                self.write(stub, &self.config.diagnostic_key, value)?;
                Ok(None)
            }
            Operation::Write { key, value } => {
                self.write(stub, &key, value)?;
                Ok(None)
            }
            Operation::StartShipment { id, shipment } => {
                self.start_shipment(stub, &id, shipment).map(Some)
            }
            Operation::TransferOwner { id, new_owner } => {
                let outcome = self.transfer_owner(stub, &id, new_owner)?;
                Ok(outcome.shipment().map(Shipment::encode))
            }
            operation @ (Operation::Read { .. } | Operation::ReadShipment { .. }) => {
                self.execute_query(&*stub, operation)
            }
        }
    }

    /// Executes a read-only operation. Operations modifying the state are not
    /// known to queries and fail with [`ChaincodeError::UnknownOperation`].
    pub fn execute_query<S: StateReadProvider>(
        &self,
        stub: &S,
        operation: Operation,
    ) -> Result<Payload, ChaincodeError> {
        match operation {
            Operation::Read { key } => self.read(stub, &key).map(Some),
            Operation::ReadShipment { id } => self.shipment(stub, &id).map(|s| Some(s.encode())),
            operation => Err(ChaincodeError::UnknownOperation(
                EntryPoint::Query,
                operation.method().to_string(),
            )),
        }
    }

    pub fn write<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        key: &str,
        value: impl Into<Vec<u8>>,
    ) -> Result<(), ChaincodeError> {
        stub.put_state(key, value.into())
            .map_err(|e| ChaincodeError::storage(StateAccess::Write, key, e))
    }

    pub fn read<S: StateReadProvider>(
        &self,
        stub: &S,
        key: &str,
    ) -> Result<Vec<u8>, ChaincodeError> {
        stub.get_state(key)
            .map_err(|e| ChaincodeError::storage(StateAccess::Read, key, e))?
            .ok_or_else(|| ChaincodeError::NotFound(key.to_owned()))
    }

    /// Reads and decodes the shipment record.
    pub fn shipment<S: StateReadProvider>(
        &self,
        stub: &S,
        id: &ShipmentId,
    ) -> Result<Shipment, ChaincodeError> {
        let data = self.read(stub, id.ledger_key())?;
        Ok(Shipment::decode(data)?)
    }

    /// Records a new shipment, replacing any shipment stored under the same id.
    ///
    /// Returns the encoded record.
    pub fn start_shipment<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        id: &ShipmentId,
        shipment: Shipment,
    ) -> Result<Vec<u8>, ChaincodeError> {
        debug!(
            "adding shipment {id} @ {}, {}, {}",
            shipment.current_owner,
            shipment.maximum_temperature_recorded,
            shipment.temperature_threshold
        );
        let data = shipment.encode();
        self.write(stub, id.ledger_key(), data.clone())?;
        info!("shipment {id} is started by {}", shipment.current_owner);
        Ok(data)
    }

    /// Hands the shipment over to a new owner, provided the recorded temperature
    /// stays under the threshold.
    ///
    /// A temperature breach is not an error: the stored record stays as is and
    /// the rejection is reported through [`TransferOutcome::Rejected`].
    pub fn transfer_owner<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        id: &ShipmentId,
        new_owner: impl Into<String>,
    ) -> Result<TransferOutcome, ChaincodeError> {
        let shipment = self.shipment(&*stub, id)?;
        let outcome = shipment.transfer(new_owner);
        match &outcome {
            TransferOutcome::Updated(shipment) => {
                self.write(stub, id.ledger_key(), shipment.encode())?;
                info!("owner of shipment {id} changed to {}", shipment.current_owner);
            }
            TransferOutcome::Rejected(breach) => warn!("shipment {id}: {breach}"),
        }
        Ok(outcome)
    }
}

impl Chaincode for ShipmentChaincode {
    fn init<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        args: &[String],
    ) -> Result<Payload, ChaincodeError> {
        let operation = Operation::parse(Method::Init, args, &self.config)?;
        self.execute(stub, operation)
    }

    fn invoke<S: StateWriteProvider>(
        &self,
        stub: &mut S,
        function: &str,
        args: &[String],
    ) -> Result<Payload, ChaincodeError> {
        debug!("invoke is running {function}");
        let method = self.resolve(EntryPoint::Invoke, function)?;
        let operation = Operation::parse(method, args, &self.config)?;
        self.execute(stub, operation)
    }

    fn query<S: StateReadProvider>(
        &self,
        stub: &S,
        function: &str,
        args: &[String],
    ) -> Result<Payload, ChaincodeError> {
        debug!("query is running {function}");
        let method = self.resolve(EntryPoint::Query, function)?;
        let operation = Operation::parse(method, args, &self.config)?;
        self.execute_query(stub, operation)
    }
}
