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

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// number of chars in a `YYYY-MM-DD HH` date-hour spec
pub const DATE_HOUR_LEN: usize = 13;

/// parse the leading `YYYY-MM-DD HH` part of a (UTC) date time spec such as `2021-09-07 03:12:45`.
/// Minutes, seconds and anything else that follows the hour are ignored, i.e. the result is always a full hour
pub fn parse_utc_date_hour (s: &str) -> Option<DateTime<Utc>> {
    let prefix = s.trim().get(0..DATE_HOUR_LEN)?;
    // chrono needs at least hour and minute to build a time
    NaiveDateTime::parse_from_str( &format!("{prefix}:00"), "%Y-%m-%d %H:%M").ok()
        .map( |ndt| ndt.and_utc())
}

/// add `n` hours, returning `None` if the result is out of range
pub fn add_hours (dt: &DateTime<Utc>, n: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_hours(n).and_then( |delta| dt.checked_add_signed(delta))
}
