//! Round-trip benchmark for the strict ISO 8601 converters.
//!
//! Generates deterministic pseudo-random values, formats them, parses the
//! text back and checks that every value survives unchanged.

use std::time::{Duration, Instant};

use serde::Serialize;
use strict_iso8601::model::days_in_month;
use strict_iso8601::{
    CalendarDate, Converter, DateConverter, OffsetDateTime, OffsetDateTimeConverter,
    TimeConverter, TimeOfDay, UtcOffset,
};

// =============================================================================
// VALUE GENERATION
// =============================================================================

/// SplitMix64, enough to spread values over every field without a
/// dependency.
struct SplitMix(u64);

impl SplitMix {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }

    fn date(&mut self) -> CalendarDate {
        let year = self.below(10_000) as u16;
        let month = 1 + self.below(12) as u8;
        let day = 1 + self.below(u64::from(days_in_month(year, month))) as u8;
        CalendarDate::new(year, month, day).expect("generated date in range")
    }

    fn time(&mut self) -> TimeOfDay {
        // Cover every fraction width: none, milli, micro and nano groups.
        let nanos = match self.below(4) {
            0 => 0,
            1 => self.below(1_000) as u32 * 1_000_000,
            2 => self.below(1_000_000) as u32 * 1_000,
            _ => self.below(1_000_000_000) as u32,
        };
        TimeOfDay::new(
            self.below(24) as u8,
            self.below(60) as u8,
            self.below(60) as u8,
            nanos,
        )
        .expect("generated time in range")
    }

    fn offset(&mut self) -> UtcOffset {
        let minutes = self.below(2 * 1080 + 1) as i16 - 1080;
        UtcOffset::from_total_minutes(minutes).expect("generated offset in range")
    }

    fn datetime(&mut self) -> OffsetDateTime {
        OffsetDateTime::new(self.date(), self.time(), self.offset())
    }
}

// =============================================================================
// BENCHMARK
// =============================================================================

struct Report {
    name: &'static str,
    count: usize,
    bytes: usize,
    format_time: Duration,
    parse_time: Duration,
}

impl Report {
    fn print(&self) {
        println!("\n{} ({} values, {} bytes of text)", self.name, self.count, self.bytes);
        println!(
            "  format: {:?} ({:.0} ns/value)",
            self.format_time,
            self.format_time.as_nanos() as f64 / self.count as f64
        );
        println!(
            "  parse:  {:?} ({:.0} ns/value, {:.2} MB/s)",
            self.parse_time,
            self.parse_time.as_nanos() as f64 / self.count as f64,
            (self.bytes as f64 / 1_000_000.0) / self.parse_time.as_secs_f64()
        );
    }
}

fn roundtrip<C>(name: &'static str, converter: C, values: &[C::Value]) -> Report
where
    C: Converter,
    C::Value: PartialEq + std::fmt::Debug,
{
    let format_start = Instant::now();
    let texts: Vec<String> = values
        .iter()
        .map(|value| converter.format(Some(value)).expect("present value formats"))
        .collect();
    let format_time = format_start.elapsed();

    let parse_start = Instant::now();
    let parsed: Vec<C::Value> = texts
        .iter()
        .map(|text| converter.parse(Some(text.as_str())).expect("canonical text parses"))
        .collect();
    let parse_time = parse_start.elapsed();

    for ((value, text), back) in values.iter().zip(&texts).zip(&parsed) {
        assert_eq!(value, back, "Roundtrip failed for {}", text);
    }

    Report {
        name,
        count: values.len(),
        bytes: texts.iter().map(String::len).sum(),
        format_time,
        parse_time,
    }
}

#[derive(Serialize)]
struct SampleRecord {
    date: CalendarDate,
    time: TimeOfDay,
    at: OffsetDateTime,
    expires: Option<OffsetDateTime>,
}

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("count must be a positive integer"))
        .unwrap_or(100_000);

    println!("Generating {} values of each kind", count);

    let mut rng = SplitMix(0x5EED);
    let dates: Vec<CalendarDate> = (0..count).map(|_| rng.date()).collect();
    let times: Vec<TimeOfDay> = (0..count).map(|_| rng.time()).collect();
    let datetimes: Vec<OffsetDateTime> = (0..count).map(|_| rng.datetime()).collect();

    roundtrip("date", DateConverter, &dates).print();
    roundtrip("time", TimeConverter, &times).print();
    roundtrip("offset date-time", OffsetDateTimeConverter, &datetimes).print();

    let sample = SampleRecord {
        date: rng.date(),
        time: rng.time(),
        at: rng.datetime(),
        expires: None,
    };
    println!(
        "\nSample record: {}",
        serde_json::to_string(&sample).expect("Failed to serialize sample")
    );
}
