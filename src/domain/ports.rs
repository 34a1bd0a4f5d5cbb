use chrono::{DateTime, FixedOffset};

/// Source of "now". Operations that depend on the current moment take one of
/// these instead of reading the process clock directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
