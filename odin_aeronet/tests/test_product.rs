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

use std::fs;
use odin_aeronet::{load_product_config_from, ProductConfig, ProductSource, DEFAULT_PRODUCT_CODE, PRODUCT_CONFIG_FILENAME};

fn load_with (contents: &str)->ProductConfig {
    let dir = tempfile::tempdir().unwrap();
    fs::write( dir.path().join( PRODUCT_CONFIG_FILENAME), contents).unwrap();
    load_product_config_from( dir.path())
}

#[test]
fn test_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let product = load_product_config_from( dir.path());

    assert_eq!( product.product_code, DEFAULT_PRODUCT_CODE);
    assert_eq!( product.source, ProductSource::Default);
    assert!( product.is_default());
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join( PRODUCT_CONFIG_FILENAME);
    fs::write( &path, "AOD20=1\n").unwrap();

    let product = load_product_config_from( dir.path());
    assert_eq!( product.product_code, "AOD20=1");
    assert_eq!( product.source, ProductSource::File(path));
}

#[test]
fn test_config_first_line_only() {
    assert_eq!( load_with("  SDA15=1  \r\nAOD20=1\n").product_code, "SDA15=1");
    assert_eq!( load_with("AOD10=1&if_no_html=1").product_code, "AOD10=1");
    assert_eq!( load_with("TOT=1\n").product_code, "TOT=1");
}

#[test]
fn test_unusable_config() {
    for contents in ["", "\n", "AOD15_1", "=1", "AOD15=\n"] {
        let product = load_with( contents);
        assert!( product.is_default(), "config {contents:?} should not be accepted");
        assert_eq!( product.product_code, DEFAULT_PRODUCT_CODE);
    }
}
