use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

/// Point on the drawing plane. `y` grows downwards.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn add_x(self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y)
    }

    pub const fn add_y(self, dy: i32) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Size of the area a fragment occupies, computed by the measure pass.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
