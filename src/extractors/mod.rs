//! Request extractors that reject with `AppError` so clients always receive JSON.

mod json;

pub use json::JsonBody;
