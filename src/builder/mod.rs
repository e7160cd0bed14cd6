pub mod page;
pub mod site;
pub mod types;
pub mod typography;

pub use site::build_site;
