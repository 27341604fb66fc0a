use std::f64::consts::TAU;

use anemo_core::{Reading, WindLevel, WindReadings, WindRequest};
use chrono::{DateTime, Timelike, Utc};

/// Mean and half-swing of the daily cycle at each level, in m/s.
const fn profile(level: WindLevel) -> (f64, f64) {
    match level {
        WindLevel::M2 => (9.0, 3.0),
        WindLevel::M10 => (14.0, 5.0),
        WindLevel::M100 => (26.0, 8.0),
    }
}

/// Smooth diurnal cycle peaking mid-afternoon, rounded to 0.1 m/s.
pub fn diurnal(level: WindLevel, at: DateTime<Utc>) -> f64 {
    let (mean, swing) = profile(level);
    let minute_of_day = f64::from(at.hour() * 60 + at.minute());
    let phase = (minute_of_day / 1440.0 - 0.375) * TAU;
    (phase.sin().mul_add(swing, mean) * 10.0).round() / 10.0
}

/// One reading per interval across the request window, endpoints included.
pub fn readings_for(req: &WindRequest) -> WindReadings {
    let step = req.interval.as_time_delta();
    let instants: Vec<DateTime<Utc>> =
        std::iter::successors(Some(req.start), |t| t.checked_add_signed(step))
            .take_while(|t| *t <= req.end)
            .take(req.expected_readings())
            .collect();
    let level = |level: WindLevel| {
        instants
            .iter()
            .map(|&at| Reading::new(at, diurnal(level, at)))
            .collect()
    };
    WindReadings::new(
        level(WindLevel::M2),
        level(WindLevel::M10),
        level(WindLevel::M100),
    )
}
