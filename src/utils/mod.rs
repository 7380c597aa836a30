// Utils compartidos

pub mod storage;
pub mod navigation;
pub mod timer;
pub mod format;

pub use storage::{KeyValueStore, LocalStorage};
pub use navigation::{BrowserNavigator, Navigator};
pub use timer::{BrowserTimer, Timer};
pub use format::*;
