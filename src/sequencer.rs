//! Grey-code LED sequencer with interrupt-driven reset.
//!
//! Provides [`GreySequencer`], which steps three LEDs through the grey-code ring
//! once per tick. A button edge, reported from interrupt context through an
//! [`EdgeHandle`], restarts the ring at the next tick; while the button is held
//! all LEDs are lit.

use crate::board::{BoardLayout, HoldBehavior};
use crate::flag::{EdgeHandle, ResetFlag};
use crate::grey::{CycleIndex, Led, LedPattern};
use crate::hal::DigitalIo;

/// Mutable state of the sequence, owned by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceState {
    /// Ring position that the next unpressed tick displays.
    pub cycle: CycleIndex,
}

/// Drives three LEDs through the grey-code cycle.
///
/// The tick path is the only writer of the LED outputs. The interrupt path
/// reaches the sequencer only through the shared [`ResetFlag`].
///
/// # Type Parameters
/// * `'f` - Lifetime of the reset flag reference (usually `'static`)
/// * `IO` - Digital I/O implementation type
pub struct GreySequencer<'f, IO: DigitalIo> {
    io: IO,
    layout: BoardLayout,
    flag: &'f ResetFlag,
    state: SequenceState,
}

impl<'f, IO: DigitalIo> GreySequencer<'f, IO> {
    /// Creates a sequencer at the first ring position.
    ///
    /// Outputs are left untouched until the first tick.
    pub fn new(io: IO, layout: BoardLayout, flag: &'f ResetFlag) -> Self {
        Self {
            io,
            layout,
            flag,
            state: SequenceState::default(),
        }
    }

    /// Handle for the button edge interrupt.
    pub fn edge_handle(&self) -> EdgeHandle<'f> {
        EdgeHandle::new(self.flag)
    }

    /// Advances the sequence by one tick and updates the LEDs.
    ///
    /// A pending reset is consumed first and moves the ring back to its start.
    /// If the button reads pressed, all LEDs are lit; otherwise the LEDs show the
    /// grey-code value at the current position. The position then advances
    /// (while pressed only under [`HoldBehavior::AdvanceUnderneath`]).
    ///
    /// # Returns
    /// The pattern written to the LEDs.
    pub fn on_tick(&mut self) -> LedPattern {
        if self.flag.take() {
            self.state.cycle = CycleIndex::START;
        }

        let pressed = self.button_pressed();
        let pattern = if pressed {
            LedPattern::ALL_ON
        } else {
            self.state.cycle.pattern()
        };

        if !pressed || self.layout.hold == HoldBehavior::AdvanceUnderneath {
            self.state.cycle = self.state.cycle.next();
        }

        self.write_leds(pattern);
        pattern
    }

    /// Button edge handling that also refreshes the LEDs immediately.
    ///
    /// Raises the reset flag and runs a tick right away, so the cycle restart is
    /// visible without waiting for the next tick. Because this writes the LEDs,
    /// call it only where nothing else can run [`on_tick`](Self::on_tick)
    /// concurrently, e.g. with the sequencer inside a
    /// `critical_section::Mutex<RefCell<_>>` shared by the handler and the loop.
    pub fn on_button_edge_immediate(&mut self) -> LedPattern {
        self.flag.raise();
        self.on_tick()
    }

    /// Returns true if the button currently reads pressed.
    pub fn button_pressed(&mut self) -> bool {
        let button = self.layout.button;
        let high = self.io.read_input(button.port, button.pin);
        self.layout.button_active.is_active(high)
    }

    /// Ring position the next unpressed tick displays.
    pub fn cycle_index(&self) -> CycleIndex {
        self.state.cycle
    }

    /// Returns the sequence state.
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Returns the board layout.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Returns a reference to the I/O implementation.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Consumes the sequencer and returns the I/O implementation.
    pub fn into_io(self) -> IO {
        self.io
    }

    fn write_leds(&mut self, pattern: LedPattern) {
        for led in Led::ALL {
            let pin = self.layout.led(led);
            let high = self.layout.led_active.drive(pattern.is_on(led));
            self.io.set_output(pin.port, pin.pin, high);
        }
    }
}
