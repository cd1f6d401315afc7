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

/// Key under which `init` stores its argument.
pub const DEFAULT_DIAGNOSTIC_KEY: &str = "hello_Block";
/// Shipment addressed by operations which are called without an explicit id.
pub const DEFAULT_SHIPMENT_ID: &str = "BlueShipment";

/// Deployment parameters of the chaincode.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ChaincodeConfig {
    pub diagnostic_key: String,
    pub default_shipment: String,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            diagnostic_key: DEFAULT_DIAGNOSTIC_KEY.to_owned(),
            default_shipment: DEFAULT_SHIPMENT_ID.to_owned(),
        }
    }
}
