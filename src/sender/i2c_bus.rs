use embedded_hal::i2c::{AddressMode, I2c};

use crate::sender::SendBitfield;

// I2C expander to LCD:
// P7 -> P0
// DB7/DB6/DB5/DB4/BL/E/RW/RS

/// A PCF8574-style I2C backpack, where the expander port carries the
/// bitfield layout directly: one bus write per snapshot
pub struct I2cBus<'a, I2cPort: I2c<A>, A: AddressMode + Clone> {
    i2c: &'a mut I2cPort,
    addr: A,
}

impl<'a, I2cPort: I2c<A>, A: AddressMode + Clone> I2cBus<'a, I2cPort, A> {
    /// Take the I2C port and the expander's bus address
    pub fn new(i2c: &'a mut I2cPort, addr: A) -> Self {
        Self { i2c, addr }
    }
}

impl<'a, I2cPort: I2c<A>, A: AddressMode + Clone> SendBitfield for I2cBus<'a, I2cPort, A> {
    fn send(&mut self, bits: u8) {
        self.i2c.write(self.addr.clone(), &[bits]).unwrap();
    }
}
