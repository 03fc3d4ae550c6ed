//! Built-in buses
//! If you want to drive the display through something else, implement the
//! [`SendBitfield`] trait

use embedded_hal::delay::DelayNs;

use crate::frame::Frame;

mod i2c_bus;
mod parallel_bus;

pub use i2c_bus::I2cBus;
pub use parallel_bus::ParallelBus;

/// [`SendBitfield`] is the one capability the driver needs from the
/// hardware: latch the eight output lines to match a bitfield snapshot
/// (layout in [`frame`](crate::frame))
///
/// Writes are fire-and-forget; the display cannot report failure and this
/// driver has no channel to do so either.
pub trait SendBitfield {
    /// Drive the output lines to match `bits`
    fn send(&mut self, bits: u8);

    /// Clock a whole [`Frame`] out, holding every snapshot for
    /// `interval_us` before the next one
    ///
    /// Snapshots go out strictly in frame order, one at a time. The
    /// controller latches on the enable falling edge, so reordering or
    /// batching would corrupt its input shift sequence.
    fn send_frame(&mut self, frame: Frame, delayer: &mut impl DelayNs, interval_us: u32) {
        for bits in frame {
            self.send(bits);
            delayer.delay_us(interval_us);
        }
    }
}
