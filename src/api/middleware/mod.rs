pub mod brand_context;
