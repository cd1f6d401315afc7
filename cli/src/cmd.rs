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

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

#[derive(Parser, Clone, Debug)]
#[clap(
    name = "shipcc",
    bin_name = "shipcc",
    author,
    version,
    about = "Runs the shipment chaincode against a local ledger state file"
)]
pub struct Args {
    /// Set verbosity level
    ///
    /// Can be used multiple times to increase verbosity. `RUST_LOG` takes precedence.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// YAML file holding the ledger state
    ///
    /// Created on the first successful invocation if it doesn't exist.
    #[clap(
        short,
        long,
        global = true,
        env = "SHIPCC_STATE",
        default_value = "state.yaml",
        value_hint = ValueHint::FilePath
    )]
    pub state: PathBuf,

    /// YAML file with the chaincode configuration
    #[clap(short, long, global = true, env = "SHIPCC_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Cmd {
    /// Initialize the chaincode, storing the value under the diagnostic key
    Init {
        /// Value to store
        value: String,
    },

    /// Invoke a function which may modify the ledger state
    Invoke {
        /// Function name (`init`, `write`, `startShipment` or `transferOwner`)
        function: String,

        /// Function arguments
        #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Query the ledger state without modifying it
    Query {
        /// Function name (`read` or `readShipment`)
        function: String,

        /// Function arguments
        #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the whole ledger state as YAML
    Dump,
}
