pub mod bootstrap;
pub mod launcher;
pub mod renderer;
pub mod secrets;
pub mod superset;

pub use bootstrap::{BootstrapSequencer, FileFlagStore, FlagStore, MemoryFlagStore, Phase};
pub use superset::{SupersetCli, SupersetCommands};
