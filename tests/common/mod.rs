//! Shared test infrastructure for grey-blinky integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use grey_blinky::{
    AlternateFunction, DigitalIo, DriveType, GpioConfig, Mode, OutputConfig, Pin, PinId, PinMask,
    PinRequest, Port, Pull, Speed,
};

// ============================================================================
// Recorded hardware operations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioOp {
    EnableClock(Port),
    ClockBarrier,
    Mode(Port, PinMask, Mode, Pull),
    Output(Port, PinMask, DriveType, Speed),
    Alternate(Port, PinMask, AlternateFunction),
}

/// Register contents of a single pin as the mock sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinRegisters {
    pub mode: Option<Mode>,
    pub pull: Option<Pull>,
    pub drive: Option<DriveType>,
    pub speed: Option<Speed>,
    pub function: Option<AlternateFunction>,
}

// ============================================================================
// Mock GPIO
// ============================================================================

/// Mock GPIO block that records every operation and tracks per-pin registers
pub struct MockGpio {
    ops: heapless::Vec<GpioOp, 64>,
    clocks: [bool; 11],
    registers: [[PinRegisters; 16]; 11],
    outputs: [u16; 11],
    inputs: [u16; 11],
    /// Set if a register was written on a port whose clock was not yet settled
    pub unclocked_write: bool,
    settled: [bool; 11],
}

impl MockGpio {
    pub fn new() -> Self {
        Self {
            ops: heapless::Vec::new(),
            clocks: [false; 11],
            registers: [[PinRegisters::default(); 16]; 11],
            outputs: [0; 11],
            inputs: [0; 11],
            unclocked_write: false,
            settled: [false; 11],
        }
    }

    pub fn ops(&self) -> &[GpioOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn registers(&self, pin: PinId) -> PinRegisters {
        self.registers[pin.port.index() as usize][pin.pin.number() as usize]
    }

    pub fn clock_enabled(&self, port: Port) -> bool {
        self.clocks[port.index() as usize]
    }

    pub fn output_high(&self, pin: PinId) -> bool {
        self.outputs[pin.port.index() as usize] & pin.mask().bits() != 0
    }

    pub fn set_input(&mut self, pin: PinId, high: bool) {
        let bits = &mut self.inputs[pin.port.index() as usize];
        if high {
            *bits |= pin.mask().bits();
        } else {
            *bits &= !pin.mask().bits();
        }
    }

    /// Number of mode register writes (one per applied request)
    pub fn mode_writes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, GpioOp::Mode(..)))
            .count()
    }

    fn for_each_pin(&mut self, port: Port, pins: PinMask, f: impl Fn(&mut PinRegisters)) {
        if !self.settled[port.index() as usize] {
            self.unclocked_write = true;
        }
        for pin in pins {
            f(&mut self.registers[port.index() as usize][pin.number() as usize]);
        }
    }
}

impl GpioConfig for MockGpio {
    fn enable_port_clock(&mut self, port: Port) {
        self.clocks[port.index() as usize] = true;
        let _ = self.ops.push(GpioOp::EnableClock(port));
    }

    fn clock_barrier(&mut self) {
        self.settled = self.clocks;
        let _ = self.ops.push(GpioOp::ClockBarrier);
    }

    fn configure_mode(&mut self, port: Port, pins: PinMask, mode: Mode, pull: Pull) {
        self.for_each_pin(port, pins, |r| {
            r.mode = Some(mode);
            r.pull = Some(pull);
        });
        let _ = self.ops.push(GpioOp::Mode(port, pins, mode, pull));
    }

    fn configure_output(&mut self, port: Port, pins: PinMask, drive: DriveType, speed: Speed) {
        self.for_each_pin(port, pins, |r| {
            r.drive = Some(drive);
            r.speed = Some(speed);
        });
        let _ = self.ops.push(GpioOp::Output(port, pins, drive, speed));
    }

    fn configure_alternate_function(
        &mut self,
        port: Port,
        pins: PinMask,
        function: AlternateFunction,
    ) {
        self.for_each_pin(port, pins, |r| r.function = Some(function));
        let _ = self.ops.push(GpioOp::Alternate(port, pins, function));
    }
}

impl DigitalIo for MockGpio {
    fn read_input(&mut self, port: Port, pin: Pin) -> bool {
        self.inputs[port.index() as usize] & PinMask::single(pin).bits() != 0
    }

    fn set_output(&mut self, port: Port, pin: Pin, high: bool) {
        let bits = &mut self.outputs[port.index() as usize];
        if high {
            *bits |= PinMask::single(pin).bits();
        } else {
            *bits &= !PinMask::single(pin).bits();
        }
    }
}

// ============================================================================
// Request helpers
// ============================================================================

pub fn output(port: Port, pins: &[u8]) -> PinRequest {
    PinRequest::output(port, PinMask::of(pins), OutputConfig::push_pull(Speed::Medium))
}

pub fn input(port: Port, pins: &[u8], pull: Pull) -> PinRequest {
    PinRequest::input(port, PinMask::of(pins), pull)
}

pub fn alternate(port: Port, pins: &[u8], af: u8) -> PinRequest {
    PinRequest::alternate(
        port,
        PinMask::of(pins),
        OutputConfig::new(DriveType::OpenDrain, Speed::High),
        AlternateFunction::new(af).unwrap(),
    )
}
