//! SSD1306 OLED display wrapper.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::DISPLAY_I2C_ADDRESS;
use crate::error::Error;
use crate::filters::{FilterBank, FilterInfo, FilterStatus};
use crate::ui::controller::View;
use crate::ui::navigation::Screen;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

const SCREEN_WIDTH: i32 = 128;
const CENTER_X: i32 = SCREEN_WIDTH / 2;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Draw `view` into the frame buffer and push it to the panel.
pub fn render<I2C>(display: &mut Display<I2C>, view: View, bank: &FilterBank) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    match view {
        View::Screen(Screen::Dashboard) => draw_dashboard(display, bank),
        View::Screen(Screen::Usage) => draw_usage(display, bank.total_water_liters),
        View::Screen(screen) => {
            if let Some(filter) = screen.filter_index().and_then(|i| bank.get(i)) {
                draw_filter(display, filter);
            }
        }
        View::ResetProgress { percent } => draw_reset_progress(display, percent),
        View::ResetConfirm => draw_reset_confirm(display),
    }

    display.flush().map_err(|_| Error::Display)
}

fn text_style(font: &'static MonoFont<'static>, color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(color)
        .build()
}

fn centered_top() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build()
}

fn centered_middle() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

fn draw_centered<D>(target: &mut D, text: &str, x: i32, y: i32, font: &'static MonoFont<'static>)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let _ = Text::with_text_style(
        text,
        Point::new(x, y),
        text_style(font, BinaryColor::On),
        centered_top(),
    )
    .draw(target);
}

fn percent_text(percent: u8) -> heapless::String<8> {
    let mut s = heapless::String::new();
    let _ = write!(s, "{}%", percent);
    s
}

/// Outlined bar with the percentage printed in the middle.
fn draw_progress_bar<D>(target: &mut D, top_left: Point, size: Size, percent: u8)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let _ = Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target);

    let inner_width = size.width.saturating_sub(2);
    let fill_width = inner_width * u32::from(percent.min(100)) / 100;
    if fill_width > 0 {
        let _ = Rectangle::new(
            top_left + Point::new(1, 1),
            Size::new(fill_width, size.height.saturating_sub(2)),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target);
    }

    // Invert the label once the fill reaches the middle of the bar.
    let color = if fill_width * 2 >= inner_width {
        BinaryColor::Off
    } else {
        BinaryColor::On
    };
    let center = top_left + Point::new(size.width as i32 / 2, size.height as i32 / 2);
    let label = percent_text(percent);
    let _ = Text::with_text_style(
        label.as_str(),
        center,
        text_style(&FONT_9X15, color),
        centered_middle(),
    )
    .draw(target);
}

/// 17x17 icon with its top-left corner at `origin`.
fn draw_status_icon<D>(target: &mut D, origin: Point, status: FilterStatus)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let line = |target: &mut D, (x0, y0): (i32, i32), (x1, y1): (i32, i32)| {
        let _ = Line::new(origin + Point::new(x0, y0), origin + Point::new(x1, y1))
            .into_styled(stroke)
            .draw(target);
    };

    match status {
        FilterStatus::Ok => {
            let _ = Circle::new(origin, 17).into_styled(stroke).draw(target);
            line(target, (4, 8), (7, 11));
            line(target, (7, 11), (12, 5));
            line(target, (4, 9), (7, 12));
            line(target, (7, 12), (12, 6));
        }
        FilterStatus::Warning => {
            let _ = Triangle::new(
                origin + Point::new(8, 0),
                origin + Point::new(0, 15),
                origin + Point::new(16, 15),
            )
            .into_styled(stroke)
            .draw(target);
            for x in 7..=9 {
                line(target, (x, 4), (x, 10));
            }
            let _ = Rectangle::new(origin + Point::new(7, 12), Size::new(3, 2))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target);
        }
        FilterStatus::Replace => {
            let _ = Circle::new(origin, 17).into_styled(stroke).draw(target);
            line(target, (4, 4), (12, 12));
            line(target, (12, 4), (4, 12));
            line(target, (5, 4), (13, 12));
            line(target, (13, 5), (5, 13));
        }
    }
}

/// One line per filter: short name, gauge, percentage, status mark.
fn draw_dashboard<D>(target: &mut D, bank: &FilterBank)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = text_style(&FONT_6X10, BinaryColor::On);
    for (row, filter) in bank.filters.iter().enumerate() {
        let y = 2 + row as i32 * 12;

        let _ = Text::with_baseline(filter.short_name, Point::new(0, y), style, Baseline::Top)
            .draw(target);

        let gauge = Size::new(58, 8);
        let _ = Rectangle::new(Point::new(22, y + 1), gauge)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(target);
        let fill = (gauge.width - 2) * u32::from(filter.percentage.min(100)) / 100;
        if fill > 0 {
            let _ = Rectangle::new(Point::new(23, y + 2), Size::new(fill, gauge.height - 2))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target);
        }

        let pct = percent_text(filter.percentage);
        let _ = Text::with_baseline(pct.as_str(), Point::new(84, y), style, Baseline::Top)
            .draw(target);

        let mark = match filter.status() {
            FilterStatus::Ok => "",
            FilterStatus::Warning => "!",
            FilterStatus::Replace => "X",
        };
        let _ = Text::with_baseline(mark, Point::new(120, y), style, Baseline::Top).draw(target);
    }
}

fn draw_filter<D>(target: &mut D, filter: &FilterInfo)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_centered(target, filter.name, CENTER_X, 0, &FONT_10X20);
    draw_progress_bar(target, Point::new(5, 22), Size::new(118, 20), filter.percentage);
    let status = filter.status();
    draw_status_icon(target, Point::new(6, 46), status);
    draw_centered(target, status.label(), CENTER_X, 47, &FONT_9X15);
}

fn draw_usage<D>(target: &mut D, liters: u32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_centered(target, "USAGE", CENTER_X, 0, &FONT_10X20);

    let mut value: heapless::String<12> = heapless::String::new();
    let _ = write!(value, "{}", liters);
    draw_centered(target, value.as_str(), CENTER_X, 22, &FONT_10X20);

    draw_centered(target, "LITERS", CENTER_X, 46, &FONT_9X15);
}

fn draw_reset_progress<D>(target: &mut D, percent: u8)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_centered(target, "RESET COUNTER", CENTER_X, 0, &FONT_6X10);
    draw_centered(target, "Keep holding both", CENTER_X, 14, &FONT_6X10);
    draw_progress_bar(target, Point::new(5, 28), Size::new(118, 20), percent);
    draw_centered(target, "Release to abort", CENTER_X, 52, &FONT_6X10);
}

fn draw_reset_confirm<D>(target: &mut D)
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_centered(target, "RESET COUNTER", CENTER_X, 0, &FONT_6X10);
    draw_centered(target, "This will reset", CENTER_X, 15, &FONT_6X10);
    draw_centered(target, "water usage to 0", CENTER_X, 25, &FONT_6X10);

    let button = Size::new(50, 15);
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for (x, label) in [(10, "CANCEL"), (68, "OK")] {
        let _ = Rectangle::new(Point::new(x, 45), button)
            .into_styled(stroke)
            .draw(target);
        draw_centered(target, label, x + 25, 48, &FONT_6X10);
    }
}
