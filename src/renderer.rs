use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Colors, Print, SetColors},
};

use crate::canvas::Canvas;
use crate::tile::ColorClass;

/// Foreground/background pair for each color class.
fn class_colors(class: ColorClass) -> Colors {
    match class {
        ColorClass::Ray => Colors::new(Color::Red, Color::DarkRed),
        ColorClass::Floor => Colors::new(Color::White, Color::Black),
        ColorClass::Wall => Colors::new(Color::Black, Color::White),
        ColorClass::Exit => Colors::new(Color::Cyan, Color::Yellow),
        ColorClass::SideGoal => Colors::new(Color::Yellow, Color::Cyan),
        ColorClass::Error => Colors::new(Color::Yellow, Color::Magenta),
        ColorClass::Text => Colors::new(Color::White, Color::Black),
    }
}

/// Terminal compositor for the canvas. Owns the frame counter and the fps
/// readout; the simulation core never sees either.
pub struct Renderer {
    frame_number: u32,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frame_number: 0 }
    }

    pub fn present(&mut self, out: &mut impl Write, canvas: &Canvas, dt: f32) -> io::Result<()> {
        for (y, row) in canvas.rows().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for cell in row {
                queue!(out, SetColors(class_colors(cell.color)), Print(cell.glyph))?;
            }
        }

        let fps = if dt > 0.0 { (1.0 / dt).round() as u32 } else { 0 };
        queue!(
            out,
            MoveTo(1, 0),
            SetColors(class_colors(ColorClass::Text)),
            Print(format!("fps: {fps} frame: {}", self.frame_number)),
        )?;
        self.frame_number = (self.frame_number + 1) % 10_000;

        out.flush()
    }
}
