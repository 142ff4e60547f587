pub mod brand_admin;
pub mod health;
pub mod site;
