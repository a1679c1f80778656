pub mod reload;

pub use reload::LogReloader;
