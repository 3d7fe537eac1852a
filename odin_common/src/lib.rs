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

//! utilities that are shared between ODIN data import crates

pub mod macros;
pub mod fs;
pub mod datetime;
pub mod net;

/// a simple min/max accumulator for f64 observations
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MinMax {
    pub n: usize,
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    pub fn new()->Self { MinMax { n: 0, min: f64::INFINITY, max: f64::NEG_INFINITY } }

    /// add a new observation
    pub fn add (&mut self, x: f64) {
        self.n += 1;
        if x < self.min { self.min = x }
        if x > self.max { self.max = x }
    }

    /// (min,max) tuple or `None` if there were no observations
    pub fn bounds (&self)->Option<(f64,f64)> {
        if self.n > 0 { Some((self.min,self.max)) } else { None }
    }
}

impl Default for MinMax {
    fn default()->Self { MinMax::new() }
}
