mod cli;
mod defaults;
mod parsers;

#[cfg(test)]
mod tests;

pub use cli::MonitorArgs;
pub use defaults::default_charts_path;
pub use parsers::{parse_bound_arg, parse_duration_arg, parse_header};
