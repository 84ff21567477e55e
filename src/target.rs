use rand::{rngs::StdRng, Rng, SeedableRng};

/// Largest percentage offset a target may be placed at, on either axis.
/// Keeps the whole marker inside the play surface.
pub const MAX_COORDINATE: u8 = 75;

/// Percentage offsets within the play surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Identity of a rendered target, unique per controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub u64);

/// A clickable marker placed on the play surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    pub position: Position,
}

/// Draws target positions from an injected random source
#[derive(Debug)]
pub struct TargetGenerator<R: Rng = StdRng> {
    rng: R,
}

impl TargetGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for TargetGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> TargetGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Both axes are drawn independently and uniformly from `0..=MAX_COORDINATE`.
    pub fn generate(&mut self) -> Position {
        let x = self.rng.gen_range(0..=MAX_COORDINATE);
        let y = self.rng.gen_range(0..=MAX_COORDINATE);
        Position { x, y }
    }
}
