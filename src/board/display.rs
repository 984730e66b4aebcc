use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use crate::ports;

type Oled<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The panel stopped acknowledging on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct BusFault;

/// 128x64 SSD1306 in buffered mode
pub struct OledDisplay<DI> {
    oled: Oled<DI>,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<DI> OledDisplay<DI>
where
    DI: WriteOnlyDataCommand,
{
    /// Initialises the panel and blanks it
    pub fn new(interface: DI) -> Result<Self, BusFault> {
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        oled.init().map_err(|_| BusFault)?;
        oled.clear_buffer();
        oled.flush().map_err(|_| BusFault)?;

        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();
        Ok(Self { oled, style })
    }
}

impl<DI> ports::Display for OledDisplay<DI>
where
    DI: WriteOnlyDataCommand,
{
    type Error = BusFault;

    fn fill(&mut self, on: bool) {
        let color = if on { BinaryColor::On } else { BinaryColor::Off };
        let _ = self.oled.clear(color);
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) {
        let position = Point::new(x as i32, y as i32);
        // Drawing into the RAM buffer cannot fail
        let _ = Text::with_baseline(text, position, self.style, Baseline::Top).draw(&mut self.oled);
    }

    fn draw_pixel(&mut self, x: u8, y: u8, on: bool) {
        self.oled.set_pixel(x as u32, y as u32, on);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.oled.flush().map_err(|_| BusFault)
    }
}
