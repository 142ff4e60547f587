pub mod admin;
pub mod brand;
