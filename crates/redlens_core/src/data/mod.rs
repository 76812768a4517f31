pub mod cookie;
pub mod credential;
pub mod header;
pub mod registry;
pub mod response;
