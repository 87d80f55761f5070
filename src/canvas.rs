use crate::grid::TileGrid;
use crate::lurker::Lurker;
use crate::tile::ColorClass;

/// One display cell of the presentation surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasCell {
    pub glyph: char,
    pub color: ColorClass,
    pub light_pass: bool,
}

/// Scaled display-cell grid the tile grid is rasterized into every frame.
/// Detection rays collide with these cells rather than with raw tiles, so
/// opacity boundaries match what is actually drawn.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub scale_x: f32,
    pub scale_y: f32,
    cells: Vec<CanvasCell>,
}

impl Canvas {
    pub fn for_grid(grid: &TileGrid, scale_x: f32, scale_y: f32) -> Self {
        let width = (grid.width as f32 * scale_x) as usize;
        let height = (grid.height as f32 * scale_y) as usize;
        Self {
            width,
            height,
            scale_x,
            scale_y,
            cells: vec![
                CanvasCell {
                    glyph: '?',
                    color: ColorClass::Error,
                    light_pass: false,
                };
                width * height
            ],
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&CanvasCell> {
        if x < self.width && y < self.height {
            Some(&self.cells[x + y * self.width])
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut CanvasCell> {
        if x < self.width && y < self.height {
            Some(&mut self.cells[x + y * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CanvasCell]> {
        self.cells.chunks(self.width)
    }

    /// Redraw every cell from the tile grid's capability table.
    pub fn draw_grid(&mut self, grid: &TileGrid) {
        for cy in 0..self.height {
            let gy = ((cy as f32 / self.scale_y) as usize).min(grid.height - 1);
            for cx in 0..self.width {
                let gx = ((cx as f32 / self.scale_x) as usize).min(grid.width - 1);
                if let Some(tile) = grid.get(gx, gy) {
                    let props = tile.props();
                    self.cells[cx + cy * self.width] = CanvasCell {
                        glyph: props.glyph,
                        color: props.color,
                        light_pass: !props.blocks_light,
                    };
                }
            }
        }
    }

    /// Stamp lurker glyphs. A lurker's body occludes light like a wall.
    pub fn draw_lurkers(&mut self, lurkers: &[Lurker]) {
        for lurker in lurkers {
            let cx = (lurker.pos_x * self.scale_x) as usize;
            let cy = (lurker.pos_y * self.scale_y) as usize;
            if let Some(cell) = self.cell_mut(cx, cy) {
                *cell = CanvasCell {
                    glyph: '@',
                    color: ColorClass::Exit,
                    light_pass: false,
                };
            }
        }
    }

    /// Stamp the player glyph at a tile position.
    pub fn draw_player(&mut self, x: usize, y: usize) {
        let cx = (x as f32 * self.scale_x) as usize;
        let cy = (y as f32 * self.scale_y) as usize;
        if let Some(cell) = self.cell_mut(cx, cy) {
            *cell = CanvasCell {
                glyph: '%',
                color: ColorClass::Exit,
                light_pass: false,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn canvas_dimensions_follow_the_scale() {
        let grid = TileGrid::filled(10, 6, Tile::Floor);
        let canvas = Canvas::for_grid(&grid, 2.0, 1.0);
        assert_eq!(canvas.width, 20);
        assert_eq!(canvas.height, 6);
    }

    #[test]
    fn transparency_comes_from_the_tile_capability_table() {
        let mut grid = TileGrid::filled(4, 4, Tile::Floor);
        grid.set(2, 2, Tile::Wall);

        let mut canvas = Canvas::for_grid(&grid, 2.0, 1.0);
        canvas.draw_grid(&grid);

        // Both scaled columns of the wall tile are opaque.
        assert!(!canvas.cell(4, 2).unwrap().light_pass);
        assert!(!canvas.cell(5, 2).unwrap().light_pass);
        assert_eq!(canvas.cell(4, 2).unwrap().glyph, '#');
        assert!(canvas.cell(0, 0).unwrap().light_pass);
    }

    #[test]
    fn lurker_and_player_stamps_are_opaque() {
        let grid = TileGrid::filled(8, 8, Tile::Floor);
        let mut canvas = Canvas::for_grid(&grid, 1.0, 1.0);
        canvas.draw_grid(&grid);

        canvas.draw_lurkers(&[Lurker::at(3.0, 4.0)]);
        canvas.draw_player(6, 6);

        let lurker_cell = canvas.cell(3, 4).unwrap();
        assert_eq!(lurker_cell.glyph, '@');
        assert!(!lurker_cell.light_pass);

        let player_cell = canvas.cell(6, 6).unwrap();
        assert_eq!(player_cell.glyph, '%');
        assert!(!player_cell.light_pass);
    }

    #[test]
    fn off_canvas_stamps_are_dropped() {
        let grid = TileGrid::filled(4, 4, Tile::Floor);
        let mut canvas = Canvas::for_grid(&grid, 1.0, 1.0);
        canvas.draw_grid(&grid);
        canvas.draw_player(9, 9);
        assert!(canvas.rows().flatten().all(|c| c.glyph != '%'));
    }
}
