mod login;
mod profile;

pub use login::*;
pub use profile::*;
