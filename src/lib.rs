pub mod actions;
pub mod errors;
pub mod manifest;
pub mod materializer;
pub mod options;
pub mod plan;
pub mod project;
pub mod templates;
