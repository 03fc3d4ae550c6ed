//! Instruction bytes understood by the controller
//!
//! Every variant encodes to the raw byte the datasheet gives for it; the
//! framing into nibbles happens later, in [`frame`](crate::frame).

use crate::utils::BitOps;

/// On/off switch carried inside a command
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Switched off
    Off,
    /// Switched on
    #[default]
    On,
}

/// How many display lines the controller drives
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    /// Single line
    OneLine,
    /// Two lines (four-line modules multiplex these)
    #[default]
    TwoLine,
}

/// Character cell size
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5x8 dots
    #[default]
    Font5x8,
    /// 5x11 dots
    Font5x11,
}

/// Commands this driver can issue
#[derive(Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Blank the display and move the cursor to address 0
    ClearDisplay,
    /// Move the cursor to address 0 and undo any display shift
    ReturnHome,
    /// Display, cursor and cursor-blink switches
    DisplayOnOff {
        /// Whole display on/off (display RAM is kept)
        display: State,
        /// Underline cursor
        cursor: State,
        /// Blinking cursor cell
        cursor_blink: State,
    },
    /// Line count and font; the bus width bit stays clear, this driver only
    /// speaks 4-bit mode
    FunctionSet(LineMode, Font),
    /// First pulse of the legacy software reset, forces the controller out
    /// of whatever bus state power-up left it in
    SoftResetFirst,
    /// Second reset pulse, lands the controller in 4-bit mode
    SoftResetSecond,
    /// Move the cursor to a DDRAM address (see [`Line`] for line bases)
    SetDdramAddr(u8),
}

impl From<CommandSet> for u8 {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => 0b0000_0001,

            CommandSet::ReturnHome => 0b0000_0010,

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                if display == State::On {
                    raw_bits = raw_bits.set_bit(2);
                }
                if cursor == State::On {
                    raw_bits = raw_bits.set_bit(1);
                }
                if cursor_blink == State::On {
                    raw_bits = raw_bits.set_bit(0);
                }

                raw_bits
            }

            CommandSet::FunctionSet(line, font) => {
                let mut raw_bits: u8 = 0b0010_0000;

                if line == LineMode::TwoLine {
                    raw_bits = raw_bits.set_bit(3);
                }
                if font == Font::Font5x11 {
                    raw_bits = raw_bits.set_bit(2);
                }

                raw_bits
            }

            CommandSet::SoftResetFirst => 0b0011_0011,

            CommandSet::SoftResetSecond => 0b0011_0010,

            CommandSet::SetDdramAddr(addr) => {
                assert!(addr < 2u8.pow(7), "DDRAM address out of range");

                0b1000_0000 | addr
            }
        }
    }
}

/// A display line, named by the DDRAM address its first cell sits at
///
/// The controller addresses characters, not lines; moving the cursor to the
/// start of a line means issuing [`CommandSet::SetDdramAddr`] with the
/// line's base address.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Topmost line, base address `0x00`
    First,
    /// Second line, base address `0x40`
    Second,
    /// Third line (20x4 modules), base address `0x14`
    Third,
    /// Fourth line (20x4 modules), base address `0x54`
    Fourth,
}

impl Line {
    /// DDRAM address of the first cell of this line
    pub fn start_addr(self) -> u8 {
        match self {
            Line::First => 0x00,
            Line::Second => 0x40,
            Line::Third => 0x14,
            Line::Fourth => 0x54,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_commands() {
        assert_eq!(u8::from(CommandSet::ClearDisplay), 0x01);
        assert_eq!(u8::from(CommandSet::ReturnHome), 0x02);
        assert_eq!(u8::from(CommandSet::SoftResetFirst), 0x33);
        assert_eq!(u8::from(CommandSet::SoftResetSecond), 0x32);
    }

    #[test]
    fn display_on_off() {
        assert_eq!(
            u8::from(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::On,
                cursor_blink: State::On,
            }),
            0x0F
        );
        assert_eq!(
            u8::from(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::Off,
                cursor_blink: State::Off,
            }),
            0x0C
        );
    }

    #[test]
    fn function_set() {
        assert_eq!(
            u8::from(CommandSet::FunctionSet(LineMode::TwoLine, Font::Font5x8)),
            0x28
        );
        assert_eq!(
            u8::from(CommandSet::FunctionSet(LineMode::OneLine, Font::Font5x11)),
            0x24
        );
    }

    #[test]
    fn line_addressing() {
        assert_eq!(u8::from(CommandSet::SetDdramAddr(Line::First.start_addr())), 0x80);
        assert_eq!(u8::from(CommandSet::SetDdramAddr(Line::Second.start_addr())), 0xC0);
        assert_eq!(u8::from(CommandSet::SetDdramAddr(Line::Third.start_addr())), 0x94);
        assert_eq!(u8::from(CommandSet::SetDdramAddr(Line::Fourth.start_addr())), 0xD4);
    }

    #[test]
    #[should_panic(expected = "DDRAM address out of range")]
    fn ddram_address_overflow() {
        let _ = u8::from(CommandSet::SetDdramAddr(0x80));
    }
}
