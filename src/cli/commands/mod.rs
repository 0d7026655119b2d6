pub mod options;
pub mod resolve;

pub use options::{DescribeArgs, ListArgs, PropsArgs};
pub use resolve::{ImportArgs, OutputArgs, OutputFormat, ResolveArgs};
