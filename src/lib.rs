#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PinRequest`**: One entry of a pin table: port, pin set, mode and pull
//! - **`PinMask`**: An opaque set of pins within one port
//! - **`PinTable`**: A validated, bounded, ordered table of requests; later entries win
//! - **`ResolvedPins`**: The table after pin ownership conflicts are resolved
//! - **`GpioConfig`**: Trait to implement for your clock and pin configuration registers
//! - **`DigitalIo`**: Trait to implement for pin level reads and writes
//! - **`GreySequencer`**: Steps three LEDs through a grey-code cycle, one step per tick
//! - **`ResetFlag`** / **`EdgeHandle`**: Interrupt-safe channel from the button handler
//! - **`BoardLayout`**: Which pins are LEDs and button, and their polarities
//!
//! Pin setup runs once at boot through [`setup_pins`]. After that the sequencer is
//! driven by two triggers: a periodic tick calling [`GreySequencer::on_tick`], and a
//! button edge interrupt calling [`EdgeHandle::on_button_edge`].

pub mod pins;
pub mod types;
pub mod hal;
pub mod table;
pub mod resolver;
pub mod grey;
pub mod flag;
pub mod board;
pub mod sequencer;

pub use pins::{Pin, PinId, PinMask, Port};
pub use types::{
    AlternateFunction, DriveType, Mode, OutputConfig, PinMode, PinRequest, Pull, Speed,
    TableError,
};
pub use hal::{DigitalIo, GpioConfig};
pub use table::{PinTable, PinTableBuilder};
pub use resolver::{ResolvedPins, enable_peripheral_clocks, resolve_pins, setup_pins};
pub use grey::{CycleIndex, GREY_CODE, Led, LedPattern};
pub use flag::{EdgeHandle, ResetFlag};
pub use board::{BoardLayout, HoldBehavior, Level, TICK_INTERVAL_MS};
pub use sequencer::{GreySequencer, SequenceState};
