pub mod train;
pub mod watch;

pub use train::{TrainMode, TrainModeConfig};
pub use watch::{Speed, WatchMode};
