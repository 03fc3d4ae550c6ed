use embedded_hal::digital::OutputPin;

use crate::{
    frame::{DATA_MASK, EN_POS, RS_POS, RW_POS},
    sender::SendBitfield,
    utils::{BitOps, BitState},
};

/// Fans a bitfield out to discrete GPIO: three control pins and the four
/// data lines of the 4-bit bus
///
/// The backlight bit has no pin here; on a directly wired module the LED is
/// powered separately. All pins are plain outputs, this driver never reads
/// the controller back.
pub struct ParallelBus<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
{
    rs_pin: ControlPin,
    rw_pin: ControlPin,
    en_pin: ControlPin,
    db_pins: [DBPin; 4],
}

impl<ControlPin, DBPin> ParallelBus<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
{
    /// Wire up RS, RW, E and DB4..DB7
    pub fn new(
        rs: ControlPin,
        rw: ControlPin,
        en: ControlPin,
        db4: DBPin,
        db5: DBPin,
        db6: DBPin,
        db7: DBPin,
    ) -> Self {
        Self {
            rs_pin: rs,
            rw_pin: rw,
            en_pin: en,
            db_pins: [db4, db5, db6, db7],
        }
    }

    fn push_data_bits(&mut self, bits: u8) {
        self.db_pins
            .iter_mut()
            .enumerate()
            .for_each(|(index, pin)| match bits.check_bit(4 + index as u8) {
                BitState::Set => {
                    pin.set_high().ok().unwrap();
                }
                BitState::Clear => {
                    pin.set_low().ok().unwrap();
                }
            });
    }
}

impl<ControlPin, DBPin> SendBitfield for ParallelBus<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
{
    fn send(&mut self, bits: u8) {
        match bits.check_bit(RS_POS) {
            BitState::Set => self.rs_pin.set_high().ok().unwrap(),
            BitState::Clear => self.rs_pin.set_low().ok().unwrap(),
        }

        match bits.check_bit(RW_POS) {
            BitState::Set => self.rw_pin.set_high().ok().unwrap(),
            BitState::Clear => self.rw_pin.set_low().ok().unwrap(),
        }

        self.push_data_bits(bits & DATA_MASK);

        // enable goes last, so both strobe edges see settled lines
        match bits.check_bit(EN_POS) {
            BitState::Set => self.en_pin.set_high().ok().unwrap(),
            BitState::Clear => self.en_pin.set_low().ok().unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::{cell::RefCell, rc::Rc};

    use embedded_hal::digital::{ErrorType, OutputPin};

    use super::ParallelBus;
    use crate::sender::SendBitfield;

    /// Pin fake sharing its level with the test through an `Rc`
    #[derive(Clone)]
    struct PinSpy {
        level: Rc<RefCell<bool>>,
    }

    impl PinSpy {
        fn new() -> Self {
            PinSpy {
                level: Rc::new(RefCell::new(false)),
            }
        }

        fn is_high(&self) -> bool {
            *self.level.borrow()
        }
    }

    impl ErrorType for PinSpy {
        type Error = Infallible;
    }

    impl OutputPin for PinSpy {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            *self.level.borrow_mut() = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            *self.level.borrow_mut() = true;
            Ok(())
        }
    }

    fn wired_bus() -> (ParallelBus<PinSpy, PinSpy>, [PinSpy; 7]) {
        let pins: [PinSpy; 7] = core::array::from_fn(|_| PinSpy::new());
        let bus = ParallelBus::new(
            pins[0].clone(),
            pins[1].clone(),
            pins[2].clone(),
            pins[3].clone(),
            pins[4].clone(),
            pins[5].clone(),
            pins[6].clone(),
        );
        (bus, pins)
    }

    #[test]
    fn decodes_data_snapshot_onto_pins() {
        let (mut bus, pins) = wired_bus();

        // 'A' high nibble, strobed: RS + E + backlight + 0x40
        bus.send(0x4D);

        let [rs, rw, en, db4, db5, db6, db7] = pins;
        assert!(rs.is_high());
        assert!(!rw.is_high());
        assert!(en.is_high());
        assert!(!db4.is_high());
        assert!(!db5.is_high());
        assert!(db6.is_high());
        assert!(!db7.is_high());
    }

    #[test]
    fn releases_strobe() {
        let (mut bus, pins) = wired_bus();

        bus.send(0x4D);
        bus.send(0x49);

        assert!(!pins[2].is_high());
        // data lines keep their levels across the strobe release
        assert!(pins[5].is_high());
    }
}
