//! Board layout and configuration constants.

use crate::grey::Led;
use crate::pins::{PinId, Port};
use crate::table::{PinTable, PinTableBuilder};
use crate::types::{OutputConfig, PinRequest, Pull, Speed, TableError};

/// Interval between sequence ticks in the reference design.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Electrical level that means "active" for a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The pin level that represents `active`.
    #[inline]
    pub const fn drive(self, active: bool) -> bool {
        match self {
            Level::High => active,
            Level::Low => !active,
        }
    }

    /// Returns true if a pin reading `high` is active.
    #[inline]
    pub const fn is_active(self, high: bool) -> bool {
        self.drive(high)
    }
}

/// What the sequence does while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldBehavior {
    /// Keep advancing the ring position underneath the all-on override, so
    /// releasing the button resumes further along the cycle.
    #[default]
    AdvanceUnderneath,

    /// Hold the ring position while the button is pressed.
    Freeze,
}

/// Pins and polarities used by the grey-code sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardLayout {
    /// LD1, LD2, LD3 in bit order.
    pub leds: [PinId; 3],

    /// Level that lights an LED.
    pub led_active: Level,

    /// The button input.
    pub button: PinId,

    /// Level the button reads while pressed.
    pub button_active: Level,

    /// Pull resistor for the button input.
    pub button_pull: Pull,

    /// Output driver used for the LED pins.
    pub led_output: OutputConfig,

    pub hold: HoldBehavior,
}

impl BoardLayout {
    /// STM32F769I-Discovery: LD1 on PJ13, LD2 on PJ5, LD3 on PA12, blue button on PA0.
    pub const STM32F769I_DISCO: BoardLayout = BoardLayout {
        leds: [
            PinId::new(Port::J, 13),
            PinId::new(Port::J, 5),
            PinId::new(Port::A, 12),
        ],
        led_active: Level::High,
        button: PinId::new(Port::A, 0),
        button_active: Level::High,
        button_pull: Pull::None,
        led_output: OutputConfig::push_pull(Speed::Medium),
        hold: HoldBehavior::AdvanceUnderneath,
    };

    /// Pin driving `led`.
    #[inline]
    pub const fn led(&self, led: Led) -> PinId {
        self.leds[led as usize]
    }

    /// Sets the hold behavior.
    pub const fn with_hold(mut self, hold: HoldBehavior) -> Self {
        self.hold = hold;
        self
    }

    /// Pin table configuring the LEDs as outputs and the button as input.
    ///
    /// LEDs sharing a port are merged into one request; the button request comes
    /// last so it wins if it overlaps an LED pin.
    ///
    /// # Errors
    /// Only `CapacityExceeded`, which cannot happen for `N >= 4`.
    pub fn pin_table<const N: usize>(&self) -> Result<PinTable<N>, TableError> {
        let mut builder = PinTableBuilder::<N>::new();
        let mut handled = [false; 3];

        for (i, led) in self.leds.iter().enumerate() {
            if handled[i] {
                continue;
            }
            let mut pins = led.mask();
            for (j, other) in self.leds.iter().enumerate().skip(i + 1) {
                if other.port == led.port {
                    pins = pins.union(other.mask());
                    handled[j] = true;
                }
            }
            builder = builder.request(PinRequest::output(led.port, pins, self.led_output))?;
        }

        builder
            .request(PinRequest::input(
                self.button.port,
                self.button.mask(),
                self.button_pull,
            ))?
            .build()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::STM32F769I_DISCO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::PinMask;
    use crate::types::PinMode;

    #[test]
    fn reference_table_groups_leds_by_port() {
        let table = BoardLayout::STM32F769I_DISCO.pin_table::<4>().unwrap();
        let requests = table.requests();

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].port, Port::J);
        assert_eq!(requests[0].pins, PinMask::of(&[5, 13]));
        assert_eq!(requests[1].port, Port::A);
        assert_eq!(requests[1].pins, PinMask::of(&[12]));
        assert_eq!(requests[2].mode, PinMode::Input);
        assert_eq!(requests[2].pins, PinMask::of(&[0]));
    }

    #[test]
    fn level_polarity() {
        assert!(Level::High.drive(true));
        assert!(!Level::Low.drive(true));
        assert!(Level::Low.is_active(false));
    }
}
