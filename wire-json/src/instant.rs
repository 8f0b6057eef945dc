/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::document::Number;
use chrono::{DateTime, SecondsFormat};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, stored as seconds (and subsecond nanos) since the Unix epoch.
///
/// Timestamps travel over the wire as epoch-seconds JSON numbers; [`fmt::Display`]
/// renders RFC 3339 for logs and error messages.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// The epoch-seconds wire form of this timestamp.
    ///
    /// Whole-second values stay integral so that payloads are stable across
    /// round trips; fractional values fall back to a float.
    pub fn to_number(&self) -> Number {
        if self.subsecond_nanos == 0 {
            if self.seconds < 0 {
                Number::NegInt(self.seconds)
            } else {
                Number::PosInt(self.seconds as u64)
            }
        } else {
            Number::Float(self.epoch_fractional_seconds())
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.seconds, self.subsecond_nanos) {
            Some(date_time) => {
                write!(f, "{}", date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            // Out of chrono's range; show the raw epoch value instead.
            None => write!(f, "{}s since the epoch", self.epoch_fractional_seconds()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Instant;
    use crate::document::Number;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_conversion_preserves_seconds_and_nanos() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 500_000_000);
        let instant = Instant::from_system_time(time);
        assert_eq!(Instant::from_secs_and_nanos(1576540098, 500_000_000), instant);
        assert_eq!(1576540098, instant.epoch_seconds());
    }

    #[test]
    fn display_is_rfc3339() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!("2019-12-16T23:48:18Z", format!("{}", instant));
    }

    #[test]
    fn whole_seconds_stay_integral_on_the_wire() {
        assert_eq!(
            Number::PosInt(1576540098),
            Instant::from_epoch_seconds(1576540098).to_number()
        );
        assert_eq!(Number::NegInt(-5), Instant::from_epoch_seconds(-5).to_number());
    }

    #[test]
    fn fractional_seconds_round_trip() {
        let instant = Instant::from_f64(5.2);
        match instant.to_number() {
            Number::Float(value) => assert!((value - 5.2).abs() < 1e-9),
            other => panic!("expected float, got {:?}", other),
        }
    }
}
