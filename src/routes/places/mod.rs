mod geocode;
mod nearby;

pub use geocode::*;
pub use nearby::*;
