use crate::domain::geometry::{Color, Panel, Point, Region};
use crate::domain::services::Canvas;

const MESSAGE_SIZE: u8 = 2;
const TITLE_SIZE: u8 = 4;

fn centered_in_quadrant(panel: &Panel, region: Region, side: i16) -> Point {
    let origin = panel.quadrant_origin(region);
    Point::new(
        origin.x + (panel.width / 2 - side) / 2,
        origin.y + (panel.height / 2 - side) / 2,
    )
}

fn square_side(panel: &Panel) -> i16 {
    panel.width.min(panel.height) / 2
}

fn button_side(panel: &Panel) -> i16 {
    panel.width.min(panel.height) / 4
}

pub fn draw_square(canvas: &mut dyn Canvas, panel: &Panel, region: Region, erase: bool) {
    let side = square_side(panel);
    let color = if erase { Color::Black } else { region.color() };
    canvas.fill_rect(centered_in_quadrant(panel, region, side), side, side, color);
}

pub fn draw_button(canvas: &mut dyn Canvas, panel: &Panel, region: Region) {
    let side = button_side(panel);
    canvas.fill_rect(
        centered_in_quadrant(panel, region, side),
        side,
        side,
        region.color(),
    );
}

pub fn draw_all_buttons(canvas: &mut dyn Canvas, panel: &Panel) {
    for region in Region::ALL {
        draw_button(canvas, panel, region);
    }
}

pub fn erase_all_buttons(canvas: &mut dyn Canvas, panel: &Panel) {
    let side = button_side(panel);
    for region in Region::ALL {
        canvas.fill_rect(
            centered_in_quadrant(panel, region, side),
            side,
            side,
            Color::Black,
        );
    }
}

pub fn draw_message(canvas: &mut dyn Canvas, panel: &Panel, text: &str, erase: bool) {
    let color = if erase { Color::Black } else { Color::White };
    canvas.set_cursor(Point::new(10, panel.height / 2 - 20));
    canvas.print_text(text, MESSAGE_SIZE, color);
}

pub fn draw_splash(canvas: &mut dyn Canvas, panel: &Panel, erase: bool) {
    let color = if erase { Color::Black } else { Color::White };
    canvas.set_cursor(Point::new(panel.width / 6, panel.height / 3));
    canvas.print_text("SIMON", TITLE_SIZE, color);
    canvas.set_cursor(Point::new(panel.width / 6, panel.height / 2));
    canvas.print_text("touch to start", MESSAGE_SIZE, color);
}
