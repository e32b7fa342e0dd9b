pub mod flights;
pub mod index;
