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

use thiserror::Error;
use odin_common::net::OdinNetError;

pub type Result<T> = std::result::Result<T, OdinAeronetError>;

#[derive(Error, Debug)]
pub enum OdinAeronetError {
    /// reading the swath metadata document failed
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("XML error {0}")]
    XmlError( #[from] quick_xml::Error),

    #[error("no swath metadata found")]
    NoMetadata,

    #[error("missing swath metadata: {}", .0.join(", "))]
    MissingFields( Vec<&'static str> ),

    #[error("duplicate swath metadata element {0}")]
    DuplicateField( &'static str ),

    #[error("time parse error {0}")]
    TimeParseError( String ),

    #[error("coordinate parse error {0}")]
    CoordParseError( String ),

    #[error("product config error {0}")]
    ConfigError( String ),

    #[error("net error {0}")]
    NetError( #[from] OdinNetError),
}

impl OdinAeronetError {
    /// did we fail to extract the swath bounds from the metadata document
    pub fn is_metadata_error (&self)->bool {
        use OdinAeronetError::*;
        matches!( self, IOError(_) | XmlError(_) | NoMetadata | MissingFields(_) | DuplicateField(_) | TimeParseError(_) | CoordParseError(_))
    }
}

pub fn time_parse_error (msg: impl ToString)->OdinAeronetError {
    OdinAeronetError::TimeParseError(msg.to_string())
}

pub fn coord_parse_error (msg: impl ToString)->OdinAeronetError {
    OdinAeronetError::CoordParseError(msg.to_string())
}

pub fn config_error (msg: impl ToString)->OdinAeronetError {
    OdinAeronetError::ConfigError(msg.to_string())
}
