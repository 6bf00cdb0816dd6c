use super::Rgb;

/// Object-safe view of a [`LifeEngine`](crate::LifeEngine) for hosts that
/// pick the cell model at runtime.
pub trait Simulation {
    /// Model name, for logs and window titles.
    fn model_name(&self) -> &'static str;

    /// `(width, height)` of the grid.
    fn size(&self) -> (usize, usize);

    /// Randomize the grid and advance it once.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated).
    /// Returns the seed that was actually used.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// Advance the grid by one generation.
    fn step(&mut self);

    /// Color of the cell at (x, y), `None` if the cell is dead.
    fn color_at(&self, x: usize, y: usize) -> Option<Rgb>;

    /// Number of live cells.
    fn population(&self) -> usize;

    /// Number of steps since the last reset.
    fn generation(&self) -> u64;
}
