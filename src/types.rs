//! Core types for pin table construction.

use crate::pins::{PinId, PinMask, Port};

/// Register-level pin mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Input,
    Output,
    AlternateFunction,
    Analog,
}

/// Pull resistor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    PullUp,
    PullDown,
}

/// Output driver type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveType {
    #[default]
    PushPull,
    OpenDrain,
}

/// Output slew-rate class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// ~2 MHz.
    #[default]
    Low,
    /// ~25 MHz.
    Medium,
    /// ~50 MHz.
    High,
    /// ~100 MHz.
    VeryHigh,
}

/// Output driver configuration, used by output and alternate-function pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputConfig {
    pub drive: DriveType,
    pub speed: Speed,
}

impl OutputConfig {
    #[inline]
    pub const fn new(drive: DriveType, speed: Speed) -> Self {
        Self { drive, speed }
    }

    /// Push-pull driver at the given speed.
    #[inline]
    pub const fn push_pull(speed: Speed) -> Self {
        Self::new(DriveType::PushPull, speed)
    }
}

/// Alternate-function selector (AF0-AF15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlternateFunction(u8);

impl AlternateFunction {
    /// Largest valid selector.
    pub const MAX: u8 = 15;

    /// Creates a selector, returning `None` if `index > 15`.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(AlternateFunction(index))
        } else {
            None
        }
    }

    /// The selector index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Requested pin mode together with the settings that mode needs.
///
/// Output settings exist only for `Output` and `Alternate`; the function
/// selector only for `Alternate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output(OutputConfig),
    Alternate {
        output: OutputConfig,
        function: AlternateFunction,
    },
    Analog,
}

impl PinMode {
    /// The register-level mode.
    pub const fn kind(&self) -> Mode {
        match self {
            PinMode::Input => Mode::Input,
            PinMode::Output(_) => Mode::Output,
            PinMode::Alternate { .. } => Mode::AlternateFunction,
            PinMode::Analog => Mode::Analog,
        }
    }

    /// Output driver settings, if this mode drives the pin.
    pub const fn output_config(&self) -> Option<OutputConfig> {
        match self {
            PinMode::Output(output) | PinMode::Alternate { output, .. } => Some(*output),
            PinMode::Input | PinMode::Analog => None,
        }
    }

    /// Alternate-function selector, if any.
    pub const fn alternate_function(&self) -> Option<AlternateFunction> {
        match self {
            PinMode::Alternate { function, .. } => Some(*function),
            _ => None,
        }
    }
}

/// One entry of a pin configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRequest {
    /// Port the pins belong to.
    pub port: Port,

    /// Requested pins.
    pub pins: PinMask,

    /// Mode and mode-specific settings.
    pub mode: PinMode,

    /// Pull resistor.
    pub pull: Pull,
}

impl PinRequest {
    /// Creates a request.
    #[inline]
    pub const fn new(port: Port, pins: PinMask, mode: PinMode, pull: Pull) -> Self {
        Self {
            port,
            pins,
            mode,
            pull,
        }
    }

    /// Floating or pulled input.
    pub const fn input(port: Port, pins: PinMask, pull: Pull) -> Self {
        Self::new(port, pins, PinMode::Input, pull)
    }

    /// Output without pull resistor.
    pub const fn output(port: Port, pins: PinMask, output: OutputConfig) -> Self {
        Self::new(port, pins, PinMode::Output(output), Pull::None)
    }

    /// Alternate function without pull resistor.
    pub const fn alternate(
        port: Port,
        pins: PinMask,
        output: OutputConfig,
        function: AlternateFunction,
    ) -> Self {
        Self::new(port, pins, PinMode::Alternate { output, function }, Pull::None)
    }

    /// Analog pins.
    pub const fn analog(port: Port, pins: PinMask) -> Self {
        Self::new(port, pins, PinMode::Analog, Pull::None)
    }

    /// Request covering a single pin.
    pub const fn for_pin(pin: PinId, mode: PinMode, pull: Pull) -> Self {
        Self::new(pin.port, pin.mask(), mode, pull)
    }

    /// Returns true if this request claims `pin`.
    pub fn claims(&self, pin: PinId) -> bool {
        self.port == pin.port && self.pins.contains(pin.pin)
    }
}

/// Pin table validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// No requests provided.
    EmptyTable,

    /// A request was declared without any pins.
    EmptyMask {
        /// Position of the offending request.
        index: usize,
    },

    /// Table capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::EmptyTable => {
                write!(f, "pin table must have at least one request")
            }
            TableError::EmptyMask { index } => {
                write!(f, "pin request {} does not claim any pins", index)
            }
            TableError::CapacityExceeded => {
                write!(f, "pin table capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}
