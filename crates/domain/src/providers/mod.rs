mod clock;
mod id_provider;

pub use clock::{to_iso_string, Clock, FixedClock, SystemClock};
pub use id_provider::{IdProvider, UuidProvider};
