pub mod edges;
pub mod models;

pub use edges::routes;
pub use models::{NewTask, Task};
