/// Body colors offered on the start screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnakeColor {
    #[default]
    Black,
    Blue,
    Magenta,
    Yellow,
}

impl SnakeColor {
    pub const ALL: [SnakeColor; 4] = [SnakeColor::Black, SnakeColor::Blue, SnakeColor::Magenta, SnakeColor::Yellow];

    /// Cycle to the next variant.
    pub fn next(self) -> Self {
        use SnakeColor::*;
        match self {
            Black   => Blue,
            Blue    => Magenta,
            Magenta => Yellow,
            Yellow  => Black,
        }
    }

    /// Cycle to the previous variant.
    pub fn prev(self) -> Self {
        use SnakeColor::*;
        match self {
            Black   => Yellow,
            Blue    => Black,
            Magenta => Blue,
            Yellow  => Magenta,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SnakeColor::Black => "Black",
            SnakeColor::Blue => "Blue",
            SnakeColor::Magenta => "Magenta",
            SnakeColor::Yellow => "Yellow",
        }
    }

    /// sRGB components in `0.0..=1.0`.
    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            SnakeColor::Black => (0.0, 0.0, 0.0),
            SnakeColor::Blue => (0.0, 0.0, 1.0),
            SnakeColor::Magenta => (1.0, 0.0, 1.0),
            SnakeColor::Yellow => (1.0, 1.0, 0.0),
        }
    }
}

/// Speed level 1 (slowest) to 10 (fastest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clamp `level` into `1..=10`.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Seconds between moves: 0.46 at level 1 down to 0.10 at level 10.
    pub fn move_delay(self) -> f32 {
        0.46 - f32::from(self.0 - 1) * 0.04
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(5)
    }
}

/// What the start screen hands to a new session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSelection {
    pub color: SnakeColor,
    pub speed: SpeedLevel,
}

/// Start-screen cursor. Up/Down cycle the color, Left/Right change the speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    color: SnakeColor,
    speed: SpeedLevel,
}

impl Menu {
    pub fn new(speed: SpeedLevel) -> Self {
        Self { color: SnakeColor::default(), speed }
    }

    pub fn color(&self) -> SnakeColor {
        self.color
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn up(&mut self) {
        self.color = self.color.prev();
    }

    pub fn down(&mut self) {
        self.color = self.color.next();
    }

    pub fn left(&mut self) {
        self.speed = self.speed.slower();
    }

    pub fn right(&mut self) {
        self.speed = self.speed.faster();
    }

    pub fn confirm(&self) -> MenuSelection {
        MenuSelection { color: self.color, speed: self.speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_mapping_is_linear() {
        assert!((SpeedLevel::new(1).move_delay() - 0.46).abs() < 1e-6);
        assert!((SpeedLevel::new(5).move_delay() - 0.30).abs() < 1e-6);
        assert!((SpeedLevel::new(10).move_delay() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(SpeedLevel::new(0).get(), 1);
        assert_eq!(SpeedLevel::new(42).get(), 10);
        assert_eq!(SpeedLevel::new(10).faster().get(), 10);
        assert_eq!(SpeedLevel::new(1).slower().get(), 1);
    }

    #[test]
    fn menu_cycles_colors_both_ways() {
        let mut menu = Menu::default();
        menu.up();
        assert_eq!(menu.color(), SnakeColor::Yellow);
        menu.down();
        menu.down();
        assert_eq!(menu.color(), SnakeColor::Blue);
        for _ in 0..SnakeColor::ALL.len() {
            menu.down();
        }
        assert_eq!(menu.color(), SnakeColor::Blue);
    }

    #[test]
    fn confirm_returns_the_selection() {
        let mut menu = Menu::new(SpeedLevel::new(9));
        menu.right();
        menu.right();
        menu.down();
        assert_eq!(menu.confirm(), MenuSelection { color: SnakeColor::Blue, speed: SpeedLevel::new(10) });
        menu.left();
        assert_eq!(menu.confirm().speed.get(), 9);
    }
}
