use crate::grid::TileGrid;

/// Discrete directional intent from the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
}

/// The player occupies whole tiles and only ever steps onto floor.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub x: usize,
    pub y: usize,
}

impl Player {
    pub fn apply(&mut self, intent: Intent, grid: &TileGrid) {
        let (dx, dy) = match intent {
            Intent::Up => (0, -1),
            Intent::Down => (0, 1),
            Intent::Left => (-1, 0),
            Intent::Right => (1, 0),
        };
        let next_x = self.x as i32 + dx;
        let next_y = self.y as i32 + dy;
        if next_x < 0 || next_y < 0 {
            return;
        }
        if grid.walkable(next_x as usize, next_y as usize) {
            self.x = next_x as usize;
            self.y = next_y as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn moves_onto_floor_and_refuses_walls() {
        let mut grid = TileGrid::filled(5, 5, Tile::Floor);
        grid.set(3, 2, Tile::Wall);

        let mut player = Player { x: 2, y: 2 };
        player.apply(Intent::Right, &grid);
        assert_eq!((player.x, player.y), (2, 2)); // wall

        player.apply(Intent::Down, &grid);
        assert_eq!((player.x, player.y), (2, 3));
    }

    #[test]
    fn grid_edges_are_hard_stops() {
        let grid = TileGrid::filled(3, 3, Tile::Floor);
        let mut player = Player { x: 0, y: 0 };
        player.apply(Intent::Left, &grid);
        player.apply(Intent::Up, &grid);
        assert_eq!((player.x, player.y), (0, 0));
    }
}
