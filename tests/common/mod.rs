// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use borsello::application::WalletService;
use borsello::domain::ManualClock;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Opening balance used throughout the wallet examples ($1340.56)
pub const OPENING_BALANCE: i64 = 134056;

/// Helper to build a timestamp at the given local time in a UTC+1 zone
pub fn local_time(date_str: &str, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
    FixedOffset::east_opt(3600)
        .unwrap()
        .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .unwrap()
}

/// Helper to create a clock pinned to a morning of the given date
pub fn clock_at(date_str: &str) -> ManualClock {
    ManualClock::new(local_time(date_str, 9, 30))
}

/// Helper to create a service with the standard opening balance
pub fn test_service(clock: &ManualClock) -> WalletService<&ManualClock> {
    WalletService::with_clock(OPENING_BALANCE, clock).unwrap()
}
