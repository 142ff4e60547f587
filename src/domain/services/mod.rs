pub mod brand_registry;
pub mod brand_resolver;
pub mod defaults;
pub mod theme;
