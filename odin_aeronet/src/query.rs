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

//! construction of AERONET web service (v3) queries, e.g.
//! `..print_web_data_v3?AVG=10&AOD15=1&year=2021&month=09&day=07&hour=03&year2=2021&month2=09&day2=07&hour2=04&lon1=0119.30&lon2=0121.00&lat1=-05.25&lat2=003.10`

use std::{env, fmt};
use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::{product::ProductConfig, swath::SwathMetadata};

pub const AERONET_URL: &str = "https://aeronet.gsfc.nasa.gov/cgi-bin/print_web_data_v3?";

/// environment variable to override [`AERONET_URL`] (e.g. for mirrors)
pub const AERONET_URL_ENV: &str = "ODIN_AERONET_URL";

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum AveragingMode {
    AllPoints,
    DailyAverage
}

impl AveragingMode {
    /// the mode we were built for (see `daily_average` feature)
    pub const fn build_default ()->Self {
        if cfg!(feature="daily_average") { AveragingMode::DailyAverage } else { AveragingMode::AllPoints }
    }

    pub fn avg_value (self)->u32 {
        match self {
            AveragingMode::AllPoints => 10,
            AveragingMode::DailyAverage => 20
        }
    }
}

impl fmt::Display for AveragingMode {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AVG={}", self.avg_value())
    }
}

/// the immutable service configuration queries are built for
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct QueryConfig {
    /// endpoint URL including the `?` query separator
    pub base_url: String,
    pub averaging: AveragingMode,
}

impl Default for QueryConfig {
    fn default ()->Self {
        QueryConfig { base_url: AERONET_URL.to_string(), averaging: AveragingMode::build_default() }
    }
}

impl QueryConfig {
    /// default config with the base URL taken from `ODIN_AERONET_URL` if that is set
    pub fn from_env ()->Self {
        match env::var( AERONET_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => QueryConfig { base_url, ..QueryConfig::default() },
            _ => QueryConfig::default()
        }
    }
}

/// the ordered set of query parameters for one swath
#[derive(Debug,Clone,PartialEq)]
pub struct QueryParameters {
    pub averaging: AveragingMode,
    pub product_code: String,
    pub swath: SwathMetadata,
}

impl QueryParameters {
    pub fn new (averaging: AveragingMode, product: &ProductConfig, swath: &SwathMetadata)->Self {
        QueryParameters { averaging, product_code: product.product_code.clone(), swath: *swath }
    }

    pub fn to_query_string (&self)->String {
        let s = &self.swath;
        [
            self.averaging.to_string(),
            self.product_code.clone(),
            date_hour_params( &s.start, ""),
            date_hour_params( &s.end, "2"),
            format!("lon1={:07.2}&lon2={:07.2}", s.lon_min, s.lon_max),
            format!("lat1={:06.2}&lat2={:06.2}", s.lat_min, s.lat_max),
        ].join("&")
    }
}

impl fmt::Display for QueryParameters {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str( &self.to_query_string())
    }
}

fn date_hour_params (dt: &DateTime<Utc>, suffix: &str)->String {
    format!("year{suffix}={:04}&month{suffix}={:02}&day{suffix}={:02}&hour{suffix}={:02}", dt.year(), dt.month(), dt.day(), dt.hour())
}

/// the complete query URL for given swath and product
pub fn build_query_url (config: &QueryConfig, product: &ProductConfig, swath: &SwathMetadata)->String {
    let params = QueryParameters::new( config.averaging, product, swath);
    format!("{}{}", config.base_url, params)
}
