#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Up, Self::Down, Self::Right, Self::Left].into_iter()
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Right,
            _ => Self::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}
