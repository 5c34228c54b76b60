pub mod paths;
pub mod profile;
pub mod settings;
pub mod store;

pub use paths::AppPaths;
pub use profile::{Profile, resolve_profile_name};
pub use settings::Config;
pub use store::{FileProfileStore, ProfileStore};
