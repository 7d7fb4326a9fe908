//! Hardware abstraction traits.
//!
//! Implement these on top of your PAC or HAL. Every method is a direct register
//! access that cannot fail; handle any bus errors inside the implementation.

use crate::pins::{Pin, PinMask, Port};
use crate::types::{AlternateFunction, DriveType, Mode, Pull, Speed};

/// Clock gating and pin configuration registers.
pub trait GpioConfig {
    /// Enables the peripheral clock of `port`. Must be idempotent.
    fn enable_port_clock(&mut self, port: Port);

    /// Waits until previously enabled clocks are usable.
    ///
    /// Called once after a batch of [`enable_port_clock`](Self::enable_port_clock)
    /// calls and before the first configuration write. On Cortex-M this is
    /// typically a `dsb` instruction.
    fn clock_barrier(&mut self);

    /// Writes the mode and pull registers for `pins`.
    fn configure_mode(&mut self, port: Port, pins: PinMask, mode: Mode, pull: Pull);

    /// Writes the output type and speed registers for `pins`.
    fn configure_output(&mut self, port: Port, pins: PinMask, drive: DriveType, speed: Speed);

    /// Writes the alternate-function selector for `pins`.
    fn configure_alternate_function(
        &mut self,
        port: Port,
        pins: PinMask,
        function: AlternateFunction,
    );
}

/// Level access to individual pins.
pub trait DigitalIo {
    /// Reads the input level of a pin (`true` = high).
    fn read_input(&mut self, port: Port, pin: Pin) -> bool;

    /// Drives an output pin high (`true`) or low.
    fn set_output(&mut self, port: Port, pin: Pin, high: bool);
}

impl<T: GpioConfig + ?Sized> GpioConfig for &mut T {
    fn enable_port_clock(&mut self, port: Port) {
        (**self).enable_port_clock(port)
    }

    fn clock_barrier(&mut self) {
        (**self).clock_barrier()
    }

    fn configure_mode(&mut self, port: Port, pins: PinMask, mode: Mode, pull: Pull) {
        (**self).configure_mode(port, pins, mode, pull)
    }

    fn configure_output(&mut self, port: Port, pins: PinMask, drive: DriveType, speed: Speed) {
        (**self).configure_output(port, pins, drive, speed)
    }

    fn configure_alternate_function(
        &mut self,
        port: Port,
        pins: PinMask,
        function: AlternateFunction,
    ) {
        (**self).configure_alternate_function(port, pins, function)
    }
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn read_input(&mut self, port: Port, pin: Pin) -> bool {
        (**self).read_input(port, pin)
    }

    fn set_output(&mut self, port: Port, pin: Pin, high: bool) {
        (**self).set_output(port, pin, high)
    }
}
