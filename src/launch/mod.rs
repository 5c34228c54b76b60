pub mod notify;
pub mod system;

pub use notify::{NOTIFIED_TARGET, Notifier, StderrNotifier};
pub use system::SystemLauncher;

use crate::error::AppResult;

/// Hands a URL to the operating system. Implementations must not wait for the
/// launched process.
pub trait Launcher {
    /// `None` asks for the default URL handler.
    fn open(&self, url: &str, application: Option<&str>) -> AppResult<()>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn open(&self, url: &str, application: Option<&str>) -> AppResult<()> {
        (**self).open(url, application)
    }
}
