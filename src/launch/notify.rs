/// Log target for events the user has already been notified about. The
/// console log layer skips it so the message is not printed twice.
pub const NOTIFIED_TARGET: &str = "deckurl::notified";

/// Surfaces a problem to the user without blocking the review.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("deckurl: {message}");
    }
}
