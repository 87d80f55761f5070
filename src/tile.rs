/// Color classes the renderer maps to terminal color pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorClass {
    Ray,
    Floor,
    Wall,
    Exit,
    SideGoal,
    Error,
    Text,
}

/// Per-kind capabilities. Adding a tile kind forces filling in the whole
/// row, so no kind can silently omit a property.
#[derive(Clone, Copy, Debug)]
pub struct TileProps {
    pub blocks_light: bool,
    pub blocks_movement: bool,
    pub glyph: char,
    pub color: ColorClass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor,
    FloorMoss,
    FloorRocky,
    FloorSmooth,
    FloorWater,
    NoSpawnFloor,
    Wall,
    WallMoss,
    WallRocky,
    WallSmooth,
    PlayerSpawn,
    LurkerSpawn,
    SideObjective,
    EndObjective,
}

impl Tile {
    pub fn props(self) -> TileProps {
        use ColorClass::*;
        match self {
            Tile::Floor => open(' ', Floor),
            Tile::FloorMoss => open('.', Floor),
            Tile::FloorRocky => open(',', Floor),
            Tile::FloorSmooth => open(' ', Floor),
            // Water lets light through but nothing walks across it.
            Tile::FloorWater => TileProps {
                blocks_light: false,
                blocks_movement: true,
                glyph: '~',
                color: Floor,
            },
            Tile::NoSpawnFloor => open(' ', Floor),
            Tile::Wall => solid('#', Wall),
            Tile::WallMoss => solid('#', Wall),
            Tile::WallRocky => solid('#', Wall),
            Tile::WallSmooth => solid('#', Wall),
            Tile::PlayerSpawn => open('P', Floor),
            Tile::LurkerSpawn => open('E', Floor),
            Tile::SideObjective => open('$', SideGoal),
            Tile::EndObjective => open('%', Exit),
        }
    }

    pub fn is_walkable(self) -> bool {
        !self.props().blocks_movement
    }
}

fn open(glyph: char, color: ColorClass) -> TileProps {
    TileProps {
        blocks_light: false,
        blocks_movement: false,
        glyph,
        color,
    }
}

fn solid(glyph: char, color: ColorClass) -> TileProps {
    TileProps {
        blocks_light: true,
        blocks_movement: true,
        glyph,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_block_light_and_movement() {
        for tile in [Tile::Wall, Tile::WallMoss, Tile::WallRocky, Tile::WallSmooth] {
            let props = tile.props();
            assert!(props.blocks_light);
            assert!(props.blocks_movement);
            assert!(!tile.is_walkable());
        }
    }

    #[test]
    fn floors_pass_light() {
        for tile in [Tile::Floor, Tile::FloorMoss, Tile::FloorRocky, Tile::NoSpawnFloor] {
            assert!(!tile.props().blocks_light);
            assert!(tile.is_walkable());
        }
    }

    #[test]
    fn water_is_transparent_but_impassable() {
        let props = Tile::FloorWater.props();
        assert!(!props.blocks_light);
        assert!(props.blocks_movement);
    }
}
