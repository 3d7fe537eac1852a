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

//! extraction of the time window and nadir extent of a satellite swath from its product metadata (XML) document
//! such as:
//! ```xml
//! <ProductMetaData>
//!     <StartTime>2021-09-07 03:12:45</StartTime>
//!     <EndTime>2021-09-07 03:58:10</EndTime>
//!     <NadirLongitude>120.5,119.3,121.0</NadirLongitude>
//!     <NadirLatitude>-5.25,3.10</NadirLatitude>
//!     ...
//! </ProductMetaData>
//! ```

use std::{fmt, path::Path};
use chrono::{DateTime, Utc};
use quick_xml::{Reader, events::Event};
use tracing::debug;

use odin_common::{
    MinMax,
    datetime::{add_hours, parse_utc_date_hour},
    fs::{existing_non_empty_file_from_path, file_contents_as_string}
};
use crate::errors::{coord_parse_error, time_parse_error, OdinAeronetError, Result};

/// the spatiotemporal bounds of a swath.
/// `start` and `end` are full hours, with `end` being the hour *after* the one in which the swath ended.
/// Bounds are always ordered (`lon_min <= lon_max`, `lat_min <= lat_max`)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SwathMetadata {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl fmt::Display for SwathMetadata {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} - {}, lon: [{}, {}], lat: [{}, {}]",
            self.start.format("%Y-%m-%d %H:%M"), self.end.format("%Y-%m-%d %H:%M"),
            self.lon_min, self.lon_max, self.lat_min, self.lat_max)
    }
}

/// the metadata elements we need. `StartTime` and `EndTime` have to match the (local) element name exactly,
/// the nadir coordinate lists are matched by prefix, i.e. `NadirLongitude` is recognized as `NadirLong`.
/// Sibling elements such as `ImagingStartTime` or `EndTimeUTC` are ignored
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
enum SwathField { StartTime, EndTime, NadirLong, NadirLat }

impl SwathField {
    const ALL: [SwathField;4] = [SwathField::StartTime, SwathField::EndTime, SwathField::NadirLong, SwathField::NadirLat];

    fn tag (self)->&'static str {
        match self {
            SwathField::StartTime => "StartTime",
            SwathField::EndTime => "EndTime",
            SwathField::NadirLong => "NadirLong",
            SwathField::NadirLat => "NadirLat",
        }
    }

    fn for_element (local_name: &[u8])->Option<SwathField> {
        let name = std::str::from_utf8(local_name).ok()?;
        SwathField::ALL.into_iter().find( |f| match f {
            SwathField::StartTime | SwathField::EndTime => name == f.tag(),
            SwathField::NadirLong | SwathField::NadirLat => name.starts_with( f.tag()),
        })
    }
}

/// raw text values of the recognized elements, in `SwathField` order
#[derive(Default)]
struct SwathFieldValues ([Option<String>;4]);

impl SwathFieldValues {
    fn set (&mut self, field: SwathField, value: String)->Result<()> {
        let slot = &mut self.0[field as usize];
        if slot.is_some() {
            Err( OdinAeronetError::DuplicateField( field.tag()))
        } else {
            *slot = Some(value);
            Ok(())
        }
    }

    fn into_swath_metadata (self)->Result<SwathMetadata> {
        match self.0 {
            [Some(start), Some(end), Some(lon), Some(lat)] => {
                let start = parse_hour( SwathField::StartTime, &start)?;
                let end = parse_hour( SwathField::EndTime, &end)?;
                // make sure the query window covers the last (partial) hour of the swath
                let end = add_hours( &end, 1).ok_or_else(|| time_parse_error( format!("EndTime {end} out of range")))?;
                let (lon_min, lon_max) = parse_extent( SwathField::NadirLong, &lon)?;
                let (lat_min, lat_max) = parse_extent( SwathField::NadirLat, &lat)?;

                Ok( SwathMetadata { start, end, lon_min, lon_max, lat_min, lat_max } )
            }
            values => {
                let missing: Vec<&'static str> = SwathField::ALL.iter()
                    .zip( values.iter())
                    .filter_map( |(f,v)| if v.is_none() { Some(f.tag()) } else { None })
                    .collect();

                if missing.len() == SwathField::ALL.len() {
                    Err( OdinAeronetError::NoMetadata)
                } else {
                    Err( OdinAeronetError::MissingFields(missing))
                }
            }
        }
    }
}

fn parse_hour (field: SwathField, text: &str)->Result<DateTime<Utc>> {
    parse_utc_date_hour( text).ok_or_else(|| time_parse_error( format!("{} '{}' is not a 'YYYY-MM-DD HH..' spec", field.tag(), text)))
}

/// parse comma separated list of coordinate values and return its (min,max)
fn parse_extent (field: SwathField, text: &str)->Result<(f64,f64)> {
    let mut mm = MinMax::new();

    for s in text.split(',').map( str::trim).filter( |s| !s.is_empty()) {
        let v: f64 = s.parse().map_err( |_| coord_parse_error( format!("{} value '{}' is not a number", field.tag(), s)))?;
        if !v.is_finite() {
            return Err( coord_parse_error( format!("{} value '{}' is not finite", field.tag(), s)))
        }
        mm.add(v);
    }

    mm.bounds().ok_or_else(|| coord_parse_error( format!("no {} values", field.tag())))
}

/// parse swath bounds from the text of a metadata document.
/// Each of the `StartTime`, `EndTime`, `NadirLong` and `NadirLat` elements has to occur exactly once
pub fn parse_swath_metadata (xml: &str)->Result<SwathMetadata> {
    let mut reader = Reader::from_str( xml);
    reader.config_mut().trim_text(true);

    let mut values = SwathFieldValues::default();
    let mut current: Option<(SwathField,Vec<u8>,String)> = None; // recognized element we are in: (field, element name, text)

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if current.is_none() {
                    current = SwathField::for_element( e.local_name().as_ref())
                        .map( |field| (field, e.local_name().as_ref().to_vec(), String::new()));
                }
            }
            Event::Empty(e) => {
                if current.is_none() {
                    if let Some(field) = SwathField::for_element( e.local_name().as_ref()) {
                        values.set( field, String::new())?;
                    }
                }
            }
            Event::Text(e) => {
                if let Some((_,_,text)) = &mut current {
                    text.push_str( &e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some((_,_,text)) = &mut current {
                    text.push_str( &String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => {
                if let Some((field,name,text)) = current.take() {
                    if e.local_name().as_ref() == name.as_slice() {
                        values.set( field, text)?;
                    } else {
                        current = Some((field,name,text)); // end of a nested element
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    values.into_swath_metadata()
}

/// read and parse the swath metadata document at `path`
pub fn read_swath_metadata (path: impl AsRef<Path>)->Result<SwathMetadata> {
    let path = path.as_ref();
    let mut file = existing_non_empty_file_from_path( path)?;
    let xml = file_contents_as_string( &mut file)?;

    let swath = parse_swath_metadata( &xml)?;
    debug!("swath of {:?}: {}", path, swath);

    Ok(swath)
}
