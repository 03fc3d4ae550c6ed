//! High-level operations composed from framing and transmission

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, Line, LineMode, State},
    frame::{Frame, RegisterSelection},
    sender::SendBitfield,
};

/// Hold time after every bus snapshot, in microseconds
///
/// Generous compared to the controller's enable-pulse minimum (about a
/// microsecond); tune it down with [`Lcd::set_interval_us`] once the target
/// module's datasheet timing is confirmed.
pub const DEFAULT_INTERVAL_US: u32 = 1_000;

/// Settle time after the wake-up sequence
const INIT_SETTLE_US: u32 = 10_000;
/// The clear command is one of the two slow ones
const CLEAR_SETTLE_US: u32 = 5_000;
/// Return-home is the other
const HOME_SETTLE_US: u32 = 10_000;

/// Driver handle, borrowing the caller's bus and delayer
///
/// Holds no display state; every operation is a self-contained sequence of
/// frame transmissions. The handle is not shareable: interleaved nibbles
/// from two logical bytes would corrupt the controller's input shift
/// sequence, so concurrent callers must serialize on the `&mut` borrow.
pub struct Lcd<'a, 'b, B, Delayer>
where
    B: SendBitfield,
    Delayer: DelayNs,
{
    bus: &'a mut B,
    delayer: &'b mut Delayer,
    interval_us: u32,
}

impl<'a, 'b, B, Delayer> Lcd<'a, 'b, B, Delayer>
where
    B: SendBitfield,
    Delayer: DelayNs,
{
    /// Create a driver handle and wake the display up
    ///
    /// Runs the legacy software reset (two pulses), selects the 4-bit bus
    /// with two display lines, switches display and cursor on, clears, and
    /// lets the controller settle. Assumes the bus is already wired to
    /// functioning hardware; no peripheral registers are touched here.
    pub fn new(bus: &'a mut B, delayer: &'b mut Delayer, interval_us: u32) -> Self {
        let mut lcd = Self {
            bus,
            delayer,
            interval_us,
        };

        lcd.write_command(CommandSet::SoftResetFirst);
        lcd.write_command(CommandSet::SoftResetSecond);
        lcd.write_command(CommandSet::FunctionSet(LineMode::default(), Font::default()));
        lcd.write_command(CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::On,
            cursor_blink: State::On,
        });
        lcd.write_command(CommandSet::ClearDisplay);
        lcd.delayer.delay_us(INIT_SETTLE_US);

        lcd
    }

    /// Send a command byte
    ///
    /// Takes anything that encodes to a raw instruction byte, so both
    /// [`CommandSet`] values and hand-built bytes (a line base OR'd into
    /// the set-address opcode, say) work.
    pub fn write_command(&mut self, command: impl Into<u8>) {
        self.bus.send_frame(
            Frame::new(command.into(), RegisterSelection::Command),
            self.delayer,
            self.interval_us,
        );
    }

    /// Send one byte of character data to the current cursor position
    pub fn write_data(&mut self, byte: impl Into<u8>) {
        self.bus.send_frame(
            Frame::new(byte.into(), RegisterSelection::Data),
            self.delayer,
            self.interval_us,
        );
    }

    /// Write a character
    ///
    /// The stock CGROM covers ASCII `0x20..=0x7D`; anything outside shows
    /// as the full rectangle.
    pub fn write_char(&mut self, ch: char) {
        let out_byte = match ch.is_ascii() {
            true if (0x20..=0x7D).contains(&(ch as u8)) => ch as u8,
            _ => 0xFF,
        };

        self.write_data(out_byte);
    }

    /// Write a string, character by character, at the current cursor
    /// position
    ///
    /// An empty string sends nothing. There is no rollback: characters
    /// already clocked out stay on the display.
    pub fn write_str(&mut self, str: &str) {
        str.chars().for_each(|ch| self.write_char(ch));
    }

    /// Move the cursor to the first cell of a line
    pub fn move_to_line_start(&mut self, line: Line) {
        self.write_command(CommandSet::SetDdramAddr(line.start_addr()));
    }

    /// Clear the display and return the cursor home
    pub fn reset(&mut self) {
        self.write_command(CommandSet::ClearDisplay);
        self.delayer.delay_us(CLEAR_SETTLE_US);
        self.write_command(CommandSet::ReturnHome);
        self.delayer.delay_us(HOME_SETTLE_US);
    }

    /// Wait for specified milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Wait for specified microseconds
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us)
    }

    /// Change the per-snapshot hold time
    pub fn set_interval_us(&mut self, interval_us: u32) {
        self.interval_us = interval_us;
    }

    /// The current per-snapshot hold time
    pub fn interval_us(&self) -> u32 {
        self.interval_us
    }
}
