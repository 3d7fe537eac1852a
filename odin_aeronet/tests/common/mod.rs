/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
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
#![allow(unused)]

use std::{io::{BufRead, BufReader, Write}, net::TcpListener, thread::{self, JoinHandle}};

pub const SWATH_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ProductMetaData>
    <SatelliteID>GF5B</SatelliteID>
    <SensorID>DPC</SensorID>
    <StartTime>2021-09-07 03:12:45</StartTime>
    <EndTime>2021-09-07 03:58:10</EndTime>
    <NadirLongitude>120.5,119.3,121.0</NadirLongitude>
    <NadirLatitude>-5.25,3.10</NadirLatitude>
</ProductMetaData>
"#;

pub const SWATH_QUERY: &str = "AVG=10&AOD15=1&year=2021&month=09&day=07&hour=03&year2=2021&month2=09&day2=07&hour2=04&lon1=0119.30&lon2=0121.00&lat1=-05.25&lat2=003.10";

pub const NO_SWATH_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ProductMetaData>
    <SatelliteID>GF5B</SatelliteID>
    <SamplesCount>1024</SamplesCount>
</ProductMetaData>
"#;

/// a local HTTP server that answers a single request with the given status line and body.
/// The join handle returns the request line (e.g. "GET /x?AVG=10.. HTTP/1.1")
pub fn serve_once (status: &'static str, body: Vec<u8>)->(String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn( move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new( stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line( &mut request_line).unwrap();
        loop { // skip headers
            let mut line = String::new();
            let n = reader.read_line( &mut line).unwrap();
            if n == 0 || line == "\r\n" { break }
        }

        write!( stream, "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n", status, body.len()).unwrap();
        stream.write_all( &body).unwrap();
        stream.flush().unwrap();

        request_line.trim_end().to_string()
    });

    (format!("http://{}/cgi-bin/print_web_data_v3?", addr), handle)
}

/// a base URL for which connections are refused
pub fn closed_port_url ()->String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cgi-bin/print_web_data_v3?", addr)
}
