mod rate_record;

pub use rate_record::{RateRecord, RawRateFields, parse_price};
