mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{CheckerConfig, CheckersConfig, ColorsConfig, Config, DiffConfig, LayoutConfig};
