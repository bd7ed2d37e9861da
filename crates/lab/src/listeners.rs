use std::fmt;

use crate::{Approximations, GlobalErrors, LocalErrors};

/// A notification published after a successful build.
///
/// For each build, listeners receive [`Update::Approximations`], then
/// [`Update::GlobalError`], then [`Update::LocalError`], each exactly once.
#[derive(Debug, Clone, Copy)]
pub enum Update<'a> {
    Approximations(&'a Approximations),
    GlobalError(&'a GlobalErrors),
    LocalError(&'a LocalErrors),
}

impl fmt::Display for Update<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approximations(_) => "approximations updated",
            Self::GlobalError(_) => "global error updated",
            Self::LocalError(_) => "local error updated",
        })
    }
}

/// Receives build notifications.
///
/// Functions and closures taking an [`Update`] implement this trait.
pub trait Listener {
    fn notify(&mut self, update: Update<'_>);
}

impl<F> Listener for F
where
    F: FnMut(Update<'_>),
{
    fn notify(&mut self, update: Update<'_>) {
        self(update);
    }
}

/// An ordered set of listeners.
///
/// Notification is synchronous: every listener has returned before
/// [`Listeners::notify`] does. Updates are not buffered, so a listener
/// subscribed after a build does not see it.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Box<dyn Listener>>,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener, notified after those already subscribed.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: Listener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers an update to every listener in subscription order.
    pub fn notify(&mut self, update: Update<'_>) {
        for listener in &mut self.listeners {
            listener.notify(update);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
