pub mod iso_date;
pub mod now;
pub mod parse;
pub mod timestamp;
pub mod week;

pub use crate::domain::model::{DayOverflow, WeekBounds};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
