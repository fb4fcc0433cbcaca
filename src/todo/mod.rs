pub mod filter;
pub mod id;
pub mod list;
pub mod task;

pub use filter::{filtered_view, Filter};
pub use list::TaskList;
pub use task::Task;
