mod record;
pub use record::SensorRecord;

mod error;
pub use error::DecodeError;

mod helpers;
