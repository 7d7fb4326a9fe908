//! Port, pin and pin-set types.
//!
//! A [`PinMask`] is an opaque set of pins within one port. Callers combine masks
//! with set operations; only HAL implementations need the raw register bits.

use core::ops::{BitAnd, BitOr, Sub};

/// A GPIO port: a group of pins sharing one register block.
///
/// There is no "zero" port, so a table of requests never needs a terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
}

impl Port {
    /// All ports, in register-block order.
    pub const ALL: [Port; 11] = [
        Port::A,
        Port::B,
        Port::C,
        Port::D,
        Port::E,
        Port::F,
        Port::G,
        Port::H,
        Port::I,
        Port::J,
        Port::K,
    ];

    /// Zero-based index of the port's register block (A = 0).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A pin number within a port (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// Number of pins per port.
    pub const COUNT: u8 = 16;

    /// Creates a pin, returning `None` if `number` is out of range.
    #[inline]
    pub const fn new(number: u8) -> Option<Self> {
        if number < Self::COUNT {
            Some(Pin(number))
        } else {
            None
        }
    }

    /// Creates a pin from a number known to be in range.
    ///
    /// # Panics
    /// Panics if `number >= 16`. Intended for constants.
    #[inline]
    pub const fn from_number(number: u8) -> Self {
        assert!(number < Self::COUNT, "pin number out of range");
        Pin(number)
    }

    /// The pin number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// A single pin on a specific port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    pub pin: Pin,
}

impl PinId {
    /// Creates a pin identifier.
    #[inline]
    pub const fn new(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin: Pin::from_number(pin),
        }
    }

    /// Mask containing only this pin.
    #[inline]
    pub const fn mask(self) -> PinMask {
        PinMask::single(self.pin)
    }
}

/// A set of pins within one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMask(u16);

impl PinMask {
    /// The empty set.
    pub const EMPTY: PinMask = PinMask(0);

    /// Every pin of a port.
    pub const ALL: PinMask = PinMask(u16::MAX);

    /// Set containing a single pin.
    #[inline]
    pub const fn single(pin: Pin) -> Self {
        PinMask(1 << pin.0)
    }

    /// Set built from pin numbers.
    ///
    /// # Panics
    /// Panics if any number is out of range. Intended for constants.
    pub const fn of(pins: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < pins.len() {
            bits |= 1 << Pin::from_number(pins[i]).0;
            i += 1;
        }
        PinMask(bits)
    }

    /// Pins present in either set.
    #[inline]
    pub const fn union(self, other: PinMask) -> Self {
        PinMask(self.0 | other.0)
    }

    /// Pins present in both sets.
    #[inline]
    pub const fn intersection(self, other: PinMask) -> Self {
        PinMask(self.0 & other.0)
    }

    /// Pins in `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: PinMask) -> Self {
        PinMask(self.0 & !other.0)
    }

    #[inline]
    pub const fn contains(self, pin: Pin) -> bool {
        self.0 & (1 << pin.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of pins in the set.
    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the pins in ascending order.
    pub fn iter(self) -> PinIter {
        PinIter { remaining: self.0 }
    }

    /// Raw register bits (bit n = pin n). For HAL implementations.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for PinMask {
    type Output = PinMask;

    fn bitor(self, rhs: PinMask) -> PinMask {
        self.union(rhs)
    }
}

impl BitAnd for PinMask {
    type Output = PinMask;

    fn bitand(self, rhs: PinMask) -> PinMask {
        self.intersection(rhs)
    }
}

impl Sub for PinMask {
    type Output = PinMask;

    fn sub(self, rhs: PinMask) -> PinMask {
        self.difference(rhs)
    }
}

impl From<Pin> for PinMask {
    fn from(pin: Pin) -> Self {
        PinMask::single(pin)
    }
}

impl IntoIterator for PinMask {
    type Item = Pin;
    type IntoIter = PinIter;

    fn into_iter(self) -> PinIter {
        self.iter()
    }
}

/// Iterator over the pins of a [`PinMask`].
#[derive(Debug, Clone)]
pub struct PinIter {
    remaining: u16,
}

impl Iterator for PinIter {
    type Item = Pin;

    fn next(&mut self) -> Option<Pin> {
        if self.remaining == 0 {
            return None;
        }
        let number = self.remaining.trailing_zeros() as u8;
        // clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(Pin(number))
    }
}
