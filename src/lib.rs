/*!
# Any-LCD Driver

Driver for HD44780-style character LCD modules that never touches a GPIO or
bus peripheral itself. All it asks of the hardware is a single capability:
latch eight output lines to match a raw bitfield snapshot. Everything the
controller sees (register select, the enable strobe, the two data nibbles of
every byte) is encoded into a short sequence of those snapshots.

Basic Usage:

1. Pick a "bus" <br/>
    This crate includes 2 buses:
    * 4-pin parallel bus [`sender::ParallelBus`]
    * I2C expander bus [`sender::I2cBus`]

    You can choose either of them, or you can use any bus implementing
    [`sender::SendBitfield`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], which also wakes up the
   display and puts it in 4-bit, 2-line mode
<br/>
<br/>
3. Use the methods provided by [`lcd::Lcd`] to send commands and text
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod frame;
pub mod lcd;
pub mod sender;
pub mod utils;
