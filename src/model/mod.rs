//! Data carried between the forms and the product API.

pub mod field_value;
pub mod image;
pub mod product;

pub use field_value::*;
pub use image::*;
pub use product::*;
