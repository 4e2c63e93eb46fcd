pub mod extract;
pub mod quantize;
pub mod select;

pub use extract::extract_scheme;
