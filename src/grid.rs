use crate::tile::Tile;

/// Flat tile storage indexed by (x, y). Dimensions never change after init.
pub struct TileGrid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn filled(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[x + y * self.width])
        } else {
            None
        }
    }

    /// Out-of-bounds writes are dropped; callers clamp where it matters.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        if self.in_bounds(x, y) {
            self.tiles[x + y * self.width] = tile;
        }
    }

    /// Tile under a continuous position, `None` outside the grid.
    pub fn at_pos(&self, x: f32, y: f32) -> Option<Tile> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    pub fn walkable(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Tile::is_walkable)
    }

    /// Movement probe for continuous positions; outside the grid counts
    /// as blocked.
    pub fn walkable_at(&self, x: f32, y: f32) -> bool {
        self.at_pos(x, y).is_some_and(Tile::is_walkable)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
