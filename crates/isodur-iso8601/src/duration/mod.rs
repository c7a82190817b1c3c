//! The duration value type and its canonical text form.

mod value;

pub use value::{Duration, DurationBuilder};
