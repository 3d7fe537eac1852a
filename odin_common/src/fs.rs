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

use std::fs::File;
use std::io::{self,BufRead,BufReader,Read,Write,ErrorKind};
use std::path::Path;

use crate::macros::io_error;

type Result<T> = std::result::Result<T,io::Error>;

pub fn existing_non_empty_file_from_path <P: AsRef<Path>> (path: P)-> Result<File> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if file.metadata()?.len() > 0 {
        Ok(file)
    } else {
        Err(io_error!(ErrorKind::Other, "file empty: {:?}", path))
    }
}

pub fn file_contents_as_string (file: &mut File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// read the first line of a text file, without its line terminator.
/// Returns `Ok(None)` if the file is empty
pub fn first_line_of_file <P: AsRef<Path>> (path: P) -> Result<Option<String>> {
    let mut reader = BufReader::new( File::open(path)?);
    let mut line = String::new();

    if reader.read_line( &mut line)? == 0 {
        Ok(None)
    } else {
        let len = line.trim_end_matches( ['\n','\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// create (or truncate) the file at `path` and write `contents` to it.
/// The file is closed when this function returns
pub fn set_filepath_contents <P: AsRef<Path>> (path: P, contents: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.flush()
}
