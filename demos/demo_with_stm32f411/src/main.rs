//! Drive a 16x2 character LCD with a STM32F411RET6 over the 4-bit bus

//! Wiring diagram
//!
//! LCD <-> STM32F411RET6
//! Vss <-> GND
//! Vdd <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!  V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!  RS <-> PA0
//!  RW <-> PA1
//!  EN <-> PA2 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!  D4 <-> PA3
//!  D5 <-> PA4
//!  D6 <-> PA5
//!  D7 <-> PA6
//!   A <-> 5V
//!   K <-> GND

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::rtt_init_print;
use stm32f4xx_hal::{pac, prelude::*};

use anylcd_driver::{
    command::Line,
    lcd::{Lcd, DEFAULT_INTERVAL_US},
    sender::ParallelBus,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    // init needed digital pins

    let gpioa = dp.GPIOA.split();

    // Push-pull everywhere, this driver never reads the bus back
    let rs_pin = gpioa.pa0.into_push_pull_output().erase();
    let rw_pin = gpioa.pa1.into_push_pull_output().erase();
    let en_pin = gpioa.pa2.into_push_pull_output().erase();

    let db4_pin = gpioa.pa3.into_push_pull_output().erase();
    let db5_pin = gpioa.pa4.into_push_pull_output().erase();
    let db6_pin = gpioa.pa5.into_push_pull_output().erase();
    let db7_pin = gpioa.pa6.into_push_pull_output().erase();

    // put pins together
    let mut bus = ParallelBus::new(
        rs_pin, rw_pin, en_pin, db4_pin, db5_pin, db6_pin, db7_pin,
    );

    // wakes the display up and clears it
    let mut lcd = Lcd::new(&mut bus, &mut delayer, DEFAULT_INTERVAL_US);

    lcd.write_str("hello, world!");

    lcd.move_to_line_start(Line::Second);
    lcd.write_str("4-bit bus mode");

    lcd.delay_ms(2_000);

    // tilde is not in the stock CGROM, shows as a full rectangle
    lcd.write_str(" ~");

    lcd.delay_ms(2_000);

    // start over, cursor back at the first cell
    lcd.reset();
    lcd.write_str("bye");

    loop {}
}
