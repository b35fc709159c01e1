mod announce;
pub mod plan;

pub use announce::AnnouncingGenerator;
