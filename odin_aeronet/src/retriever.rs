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

use std::path::Path;
use reqwest::StatusCode;
use tracing::info;

use odin_common::net::{blocking_client, download_url_verbatim};
use crate::errors::Result;

/// what we got from a single retrieval
#[derive(Debug,Clone)]
pub struct Retrieval {
    pub url: String,
    pub status: StatusCode,
    pub n_bytes: u64,
}

/// retrieve `url` (blocking) and save the response body unmodified to `output`.
/// The response is saved whatever its status or content type is
pub fn retrieve (url: &str, output: impl AsRef<Path>)->Result<Retrieval> {
    let output = output.as_ref();
    let client = blocking_client()?;

    info!("retrieving {}", url);
    let (status, n_bytes) = download_url_verbatim( &client, url, output)?;
    info!("{} bytes (status {}) saved to {:?}", n_bytes, status, output);

    Ok( Retrieval { url: url.to_string(), status, n_bytes } )
}
