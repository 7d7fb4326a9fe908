//! Grey-code ring and LED patterns.

/// The 3-bit grey-code cycle. Neighbours, including last and first, differ in one bit.
pub const GREY_CODE: [u8; 8] = [0, 1, 3, 2, 6, 7, 5, 4];

/// A position on the grey-code ring (0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleIndex(u8);

impl CycleIndex {
    /// First ring position.
    pub const START: CycleIndex = CycleIndex(0);

    /// Number of ring positions.
    pub const LEN: u8 = GREY_CODE.len() as u8;

    /// Creates a ring position, returning `None` if `position >= 8`.
    pub const fn new(position: u8) -> Option<Self> {
        if position < Self::LEN {
            Some(CycleIndex(position))
        } else {
            None
        }
    }

    /// The ring position.
    #[inline]
    pub const fn position(self) -> u8 {
        self.0
    }

    /// The next ring position, wrapping after the last.
    #[inline]
    pub const fn next(self) -> Self {
        CycleIndex((self.0 + 1) % Self::LEN)
    }

    /// The grey-code value at this position.
    #[inline]
    pub const fn value(self) -> u8 {
        GREY_CODE[self.0 as usize]
    }

    /// LED pattern for this position.
    #[inline]
    pub const fn pattern(self) -> LedPattern {
        LedPattern::from_bits(self.value())
    }
}

/// One of the three sequence LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Bit 0.
    Ld1,
    /// Bit 1.
    Ld2,
    /// Bit 2.
    Ld3,
}

impl Led {
    pub const ALL: [Led; 3] = [Led::Ld1, Led::Ld2, Led::Ld3];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// On/off state of the three LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern(u8);

impl LedPattern {
    pub const ALL_OFF: LedPattern = LedPattern(0);
    pub const ALL_ON: LedPattern = LedPattern(0b111);

    /// Pattern from the low three bits of `bits`; LD1 is bit 0.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        LedPattern(bits & 0b111)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_on(self, led: Led) -> bool {
        self.0 & led.bit() != 0
    }

    /// Number of LEDs whose state differs between the two patterns.
    #[inline]
    pub const fn distance(self, other: LedPattern) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}
