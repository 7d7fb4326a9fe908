//! Interrupt-safe reset flag.

use core::cell::Cell;
use critical_section::Mutex;

/// A boolean raised from interrupt context and consumed from the polling loop.
///
/// Both operations run inside a critical section, so a raise can never be lost
/// between the read and the clear of [`take`](Self::take). Raising several times
/// before the next `take` has the same effect as raising once.
///
/// `new` is `const`, so the flag can live in a `static` shared with the handler.
pub struct ResetFlag {
    raised: Mutex<Cell<bool>>,
}

impl ResetFlag {
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Raises the flag.
    #[inline]
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Clears the flag and returns whether it was raised.
    #[inline]
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).replace(false))
    }

    /// Returns whether the flag is raised, without clearing it.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }
}

impl Default for ResetFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ResetFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetFlag")
            .field("raised", &self.is_raised())
            .finish()
    }
}

/// Interrupt-side handle to a [`ResetFlag`].
///
/// This is all the button edge handler gets: it can raise the flag and nothing
/// else, so the tick path stays the only writer of the LED outputs.
#[derive(Debug, Clone, Copy)]
pub struct EdgeHandle<'f> {
    flag: &'f ResetFlag,
}

impl<'f> EdgeHandle<'f> {
    pub fn new(flag: &'f ResetFlag) -> Self {
        Self { flag }
    }

    /// Handler body for a rising or falling button edge.
    #[inline]
    pub fn on_button_edge(&self) {
        self.flag.raise();
    }
}
