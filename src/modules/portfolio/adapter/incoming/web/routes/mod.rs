pub mod get_about;
pub mod get_experiences;
pub mod get_projects;
pub mod get_single_project;
pub mod get_stack;

pub use get_about::*;
pub use get_experiences::*;
pub use get_projects::*;
pub use get_single_project::*;
pub use get_stack::*;
