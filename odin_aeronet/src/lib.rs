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

//! crate to retrieve AERONET ground truth data (https://aeronet.gsfc.nasa.gov) for the time window
//! and nadir extent of a satellite swath, as described by GF-5(B) DPC/POSP product metadata

use std::path::Path;
use tracing::info;

pub mod errors;
use errors::Result;

pub mod swath;
pub use swath::*;

pub mod product;
pub use product::*;

pub mod query;
pub use query::*;

pub mod retriever;
pub use retriever::*;

/// read swath metadata, load product config from `config_dir`, build the query and retrieve it into `output`.
/// Metadata is parsed first so that we never go out on the network if we don't have a complete swath
pub fn get_aeronet_data (metadata: impl AsRef<Path>, output: impl AsRef<Path>, config: &QueryConfig, config_dir: impl AsRef<Path>)->Result<Retrieval> {
    let swath = read_swath_metadata( metadata)?;
    let product = load_product_config_from( config_dir);

    let url = build_query_url( config, &product, &swath);
    info!("swath {}", swath);

    retrieve( &url, output)
}
