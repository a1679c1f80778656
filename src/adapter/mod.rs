pub mod tracing_filter;

pub use tracing_filter::TracingReloader;
