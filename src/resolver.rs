//! Pin ownership resolution and hardware application.
//!
//! Provides [`PinTable::resolve`], which strips from every request the pins a later
//! request on the same port also claims, and [`ResolvedPins::apply`], which writes
//! the surviving requests through a [`GpioConfig`] implementation.

use crate::hal::GpioConfig;
use crate::pins::{PinId, Port};
use crate::table::PinTable;
use crate::types::PinRequest;
use heapless::Vec;

/// The outcome of resolving a [`PinTable`].
///
/// Holds only requests that still claim at least one pin, in declaration order.
/// No two held requests on the same port share a pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPins<const N: usize> {
    requests: Vec<PinRequest, N>,
    dropped: usize,
}

impl<const N: usize> PinTable<N> {
    /// Resolves pin ownership conflicts.
    ///
    /// For each request, every pin also claimed by any later request on the same
    /// port is removed. Requests left without pins are dropped: they are fully
    /// overridden, which is not an error. Modes are never compared; declaration
    /// order alone decides.
    pub fn resolve(&self) -> ResolvedPins<N> {
        let requests = self.requests();
        let mut resolved = Vec::new();
        let mut dropped = 0;

        for (index, request) in requests.iter().enumerate() {
            let mut pins = request.pins;
            for later in requests[index + 1..].iter().filter(|r| r.port == request.port) {
                pins = pins.difference(later.pins);
            }

            if pins.is_empty() {
                #[cfg(feature = "defmt")]
                defmt::debug!("pin request {} on port {} fully overridden", index, request.port);
                dropped += 1;
                continue;
            }

            // cannot overflow: resolved is never longer than the table
            let _ = resolved.push(PinRequest { pins, ..*request });
        }

        ResolvedPins {
            requests: resolved,
            dropped,
        }
    }
}

impl<const N: usize> ResolvedPins<N> {
    /// Writes every surviving request to hardware.
    ///
    /// Per request: the mode register first, then output driver settings for
    /// output and alternate-function modes, then the function selector for
    /// alternate-function mode. Port clocks must already be enabled; see
    /// [`enable_peripheral_clocks`].
    ///
    /// Applying the same resolution again leaves the hardware unchanged.
    pub fn apply<G: GpioConfig>(&self, gpio: &mut G) {
        for request in &self.requests {
            apply_request(gpio, request);
        }
    }

    /// Surviving requests in declaration order.
    pub fn requests(&self) -> &[PinRequest] {
        &self.requests
    }

    /// Number of surviving requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of requests dropped because later requests claimed all their pins.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The request that owns `pin`, if any.
    pub fn config_for(&self, pin: PinId) -> Option<&PinRequest> {
        self.requests.iter().find(|r| r.claims(pin))
    }
}

fn apply_request<G: GpioConfig>(gpio: &mut G, request: &PinRequest) {
    #[cfg(feature = "defmt")]
    defmt::trace!("configure {}", request);

    gpio.configure_mode(request.port, request.pins, request.mode.kind(), request.pull);

    if let Some(output) = request.mode.output_config() {
        gpio.configure_output(request.port, request.pins, output.drive, output.speed);
    }

    if let Some(function) = request.mode.alternate_function() {
        gpio.configure_alternate_function(request.port, request.pins, function);
    }
}

/// Enables the clock of every port in `ports`, then waits for the clocks to settle.
///
/// Must complete before any configuration write to those ports. Enabling a clock
/// twice is harmless.
pub fn enable_peripheral_clocks<G: GpioConfig>(gpio: &mut G, ports: &[Port]) {
    for &port in ports {
        gpio.enable_port_clock(port);
    }
    gpio.clock_barrier();
}

/// Resolves `table` and writes the result, without touching clocks.
///
/// The caller must have enabled the clocks of every port in the table.
pub fn resolve_pins<G: GpioConfig, const N: usize>(gpio: &mut G, table: &PinTable<N>) {
    table.resolve().apply(gpio);
}

/// Boot-time pin setup: enables the clocks of every port the table references,
/// then resolves and applies the table.
///
/// Returns the resolution so callers can inspect pin ownership.
pub fn setup_pins<G: GpioConfig, const N: usize>(
    gpio: &mut G,
    table: &PinTable<N>,
) -> ResolvedPins<N> {
    enable_peripheral_clocks(gpio, &table.ports());

    let resolved = table.resolve();
    resolved.apply(gpio);
    resolved
}
