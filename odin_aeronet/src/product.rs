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

use std::{io::ErrorKind, path::{Path,PathBuf}};
use tracing::{info,warn};

use odin_common::fs::first_line_of_file;
use crate::errors::{config_error, OdinAeronetError, Result};

/// name of the (optional) file that selects the AERONET data product
pub const PRODUCT_CONFIG_FILENAME: &str = "aeronet_datatype.conf";

/// level 1.5 aerosol optical depth
pub const DEFAULT_PRODUCT_CODE: &str = "AOD15=1";

/// product codes are `KEY=VALUE` query fragments of (at most) this many chars
pub const PRODUCT_CODE_LEN: usize = 7;

#[derive(Debug,Clone,PartialEq,Eq)]
pub enum ProductSource {
    File(PathBuf),
    Default
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ProductConfig {
    pub product_code: String,
    pub source: ProductSource,
}

impl ProductConfig {
    pub fn default_product ()->Self {
        ProductConfig { product_code: DEFAULT_PRODUCT_CODE.to_string(), source: ProductSource::Default }
    }

    pub fn is_default (&self)->bool {
        self.source == ProductSource::Default
    }
}

/// load product config from `dir`. This never fails - if there is no usable config file we warn and fall back
/// to [`DEFAULT_PRODUCT_CODE`]
pub fn load_product_config_from (dir: impl AsRef<Path>)->ProductConfig {
    let path = dir.as_ref().join( PRODUCT_CONFIG_FILENAME);

    match read_product_code( &path) {
        Ok(product_code) => {
            info!("using product {} from {:?}", product_code, path);
            ProductConfig { product_code, source: ProductSource::File(path) }
        }
        Err(e) => {
            match e {
                OdinAeronetError::IOError(ref ioe) if ioe.kind() == ErrorKind::NotFound => {
                    warn!("{} NOT found. Using {} instead", PRODUCT_CONFIG_FILENAME, DEFAULT_PRODUCT_CODE)
                }
                _ => warn!("{} not usable ({}). Using {} instead", PRODUCT_CONFIG_FILENAME, e, DEFAULT_PRODUCT_CODE)
            }
            ProductConfig::default_product()
        }
    }
}

/// the first `PRODUCT_CODE_LEN` chars of the (trimmed) first line, which have to be a `KEY=VALUE` spec
fn read_product_code (path: &Path)->Result<String> {
    let line = first_line_of_file( path)?.ok_or_else(|| config_error("file empty"))?;
    let code: String = line.trim().chars().take( PRODUCT_CODE_LEN).collect();

    match code.split_once('=') {
        Some((key,value)) if !key.is_empty() && !value.is_empty() => Ok(code),
        _ => Err( config_error( format!("'{}' is not a KEY=VALUE product code", code)))
    }
}
