pub mod describe;
pub mod list;
pub mod output;
pub mod props;
pub mod resolve;

pub use describe::describe_command;
pub use list::list_command;
pub use props::props_command;
pub use resolve::{import_command, resolve_command};
