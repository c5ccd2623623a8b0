//! Background jobs run on a cron schedule.

pub mod verification_codes;
