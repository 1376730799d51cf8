#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates fall in `[0, size)`.
    #[must_use]
    pub fn is_within_square(&self, size: u32) -> bool {
        let size = i64::from(size);

        (0..size).contains(&i64::from(self.x)) && (0..size).contains(&i64::from(self.y))
    }
}
