mod delete;
mod history;
mod list;
mod message;

pub use delete::*;
pub use history::*;
pub use list::*;
pub use message::*;
