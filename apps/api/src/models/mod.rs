pub mod college;
pub mod milestone;
pub mod profile;
pub mod recommendation;
