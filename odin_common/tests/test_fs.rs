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

use odin_common::fs::{existing_non_empty_file_from_path, file_contents_as_string, first_line_of_file, set_filepath_contents};
use std::fs;

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("first_line.txt");

    fs::write( &path, "AOD20=1\r\nsecond line\n").unwrap();
    assert_eq!( first_line_of_file(&path).unwrap(), Some("AOD20=1".to_string()));

    fs::write( &path, "no terminator").unwrap();
    assert_eq!( first_line_of_file(&path).unwrap(), Some("no terminator".to_string()));

    fs::write( &path, "").unwrap();
    assert_eq!( first_line_of_file(&path).unwrap(), None);

    assert!( first_line_of_file( dir.path().join("does_not_exist")).is_err());
}

#[test]
fn test_set_contents_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    set_filepath_contents( &path, b"a much longer previous content").unwrap();
    set_filepath_contents( &path, &[0u8, 0xff, 0x10]).unwrap();

    assert_eq!( fs::read(&path).unwrap(), vec![0u8, 0xff, 0x10]);
}

#[test]
fn test_non_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.xml");

    fs::write( &path, "").unwrap();
    assert!( existing_non_empty_file_from_path(&path).is_err());

    fs::write( &path, "<a/>").unwrap();
    let mut file = existing_non_empty_file_from_path(&path).unwrap();
    assert_eq!( file_contents_as_string(&mut file).unwrap(), "<a/>");
}
