pub mod brand;
pub mod community;
