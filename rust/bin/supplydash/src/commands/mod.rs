pub mod context;
pub mod dashboard;
pub mod resource;
pub mod status;
