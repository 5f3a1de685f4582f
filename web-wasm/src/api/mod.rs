pub mod analyze;

pub use analyze::FetchTransport;
