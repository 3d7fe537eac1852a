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

//! common utility functions for (blocking) network operations

use std::path::Path;
use reqwest::{blocking::Client, StatusCode};

use crate::{define_error, fs::set_filepath_contents};

define_error!{ pub OdinNetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// a blocking client with the transport defaults (no custom timeout, headers or redirect policy)
pub fn blocking_client ()->Result<Client> {
    Ok( Client::builder().build()? )
}

/// fetch URL using a blocking HTTP GET and store the response body as-is in `path`, replacing
/// whatever was stored there before.
/// Note this does not check the response status, which is just returned together with the number of bytes written.
/// The file is only created once the complete body was received, i.e. transport errors leave existing files untouched
pub fn download_url_verbatim (client: &Client, url: &str, path: impl AsRef<Path>) -> Result<(StatusCode,u64)> {
    let response = client.get(url).send()?;
    let status = response.status();
    let body = response.bytes()?;

    set_filepath_contents( path, &body)?;
    Ok( (status, body.len() as u64) )
}
