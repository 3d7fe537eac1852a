/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{path::PathBuf, process::ExitCode};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odin_common::net::OdinNetError;
use odin_aeronet::{get_aeronet_data, errors::OdinAeronetError, QueryConfig};

const EXIT_METADATA: u8 = 1;
const EXIT_TRANSPORT: u8 = 2;
const EXIT_OUTPUT: u8 = 3;
const EXIT_USAGE: u8 = 5;

/// retrieve AERONET data for the time window and nadir extent of a GF-5(B) swath.
/// The product is selected by the first line of ./aeronet_datatype.conf (default AOD15=1)
#[derive(Parser, Debug)]
#[command(version, about, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// DPC or POSP metadata (XML) file of the swath
    #[arg(allow_hyphen_values = true)]
    xml: PathBuf,

    /// file to store the retrieved AERONET data in
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main()->ExitCode {
    // exactly two arguments, nothing clap would interpret as a flag or separator
    if std::env::args_os().len() != 3 {
        return usage()
    }
    let Ok(args) = Args::try_parse() else {
        return usage()
    };

    init_tracing();

    match get_aeronet_data( &args.xml, &args.output, &QueryConfig::from_env(), ".") {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_metadata_error() {
                eprintln!("{} open failed! ({})\nAborted.", args.xml.display(), e);
            } else {
                eprintln!("retrieval failed: {}", e);
            }
            ExitCode::from( exit_code(&e))
        }
    }
}

fn exit_code (e: &OdinAeronetError)->u8 {
    match e {
        OdinAeronetError::NetError( OdinNetError::IOError(_)) => EXIT_OUTPUT,
        OdinAeronetError::NetError(_) => EXIT_TRANSPORT,
        _ => EXIT_METADATA
    }
}

/// print the usage text to stderr (as all other diagnostics of this tool)
fn usage ()->ExitCode {
    let prog = std::env::args().next().unwrap_or_else(|| "get_aeronet".to_string());
    eprintln!("Usage:\n\t{} xml output", prog);
    ExitCode::from( EXIT_USAGE)
}

fn init_tracing () {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))  // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();
}
