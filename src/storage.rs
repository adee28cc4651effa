pub mod directory;
pub mod flat_file;

pub use directory::{AddError, Directory};
pub use flat_file::ParseLineError;
