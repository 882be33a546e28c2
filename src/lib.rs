pub mod article;
pub mod context;
pub mod front_matter;
pub mod generator;
pub mod markdown;
pub mod metadata;
pub mod navbar;
pub mod renderer;
