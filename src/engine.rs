use crate::{Aging, CellModel, ConfigError, Rgb, Simulation};
use std::fmt;

/// Probability of a cell being alive after [`LifeEngine::seed`].
pub const SEED_FILL_RATE: f64 = 0.5;

/// Game of Life on a torus, double-buffered.
///
/// `M` decides the cell states and the rule output; the engine only does the
/// neighborhood scan and buffer bookkeeping. Between two calls of [`step`]
/// the current buffer always holds a complete generation.
///
/// [`step`]: LifeEngine::step
pub struct LifeEngine<M: CellModel> {
    model: M,
    buffers: [Vec<M::Cell>; 2],
    current: usize,
    width: usize,
    height: usize,
    generation: u64,
}

impl<M: CellModel + Default> LifeEngine<M> {
    /// Creates a `width x height` field filled with dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::with_model(M::default(), width, height)
    }
}

impl<M: CellModel> LifeEngine<M> {
    pub fn with_model(model: M, width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        let size = width
            .checked_mul(height)
            .filter(|&s| s <= isize::MAX as usize)
            .ok_or(ConfigError::GridTooLarge { width, height })?;
        Ok(Self {
            model,
            buffers: [vec![M::DEAD; size], vec![M::DEAD; size]],
            current: 0,
            width,
            height,
            generation: 0,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[M::Cell] {
        &self.buffers[self.current]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (x % self.width) + (y % self.height) * self.width
    }

    /// Cell at (x, y); coordinates wrap around.
    pub fn cell_at(&self, x: usize, y: usize) -> M::Cell {
        self.cells()[self.index(x, y)]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.model.is_alive(self.cell_at(x, y))
    }

    /// Overwrites a cell of the current generation; coordinates wrap around.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: M::Cell) {
        let i = self.index(x, y);
        self.buffers[self.current][i] = cell;
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.buffers[self.current].fill(M::DEAD);
        self.generation = 0;
    }

    pub fn population(&self) -> usize {
        self.cells()
            .iter()
            .filter(|&&c| self.model.is_alive(c))
            .count()
    }

    /// Fills the field with random cells without advancing it.
    ///
    /// `fill_rate` - probability of cell being alive, clamped to `[0, 1]`.
    pub fn randomize(&mut self, seed: u64, fill_rate: f64) {
        use rand::{Rng, SeedableRng};

        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        for cell in self.buffers[self.current].iter_mut() {
            *cell = if rng.gen_bool(fill_rate) {
                M::SEEDED
            } else {
                M::DEAD
            };
        }
        self.generation = 0;
    }

    /// Randomizes the field with an even chance for every cell and advances
    /// it once, so the first frame is never raw noise.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated).
    /// Returns the seed that was used.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random);
        log::info!(
            "seeding {} field {}x{} with seed {}",
            M::NAME,
            self.width,
            self.height,
            seed
        );
        self.randomize(seed, SEED_FILL_RATE);
        self.step();
        seed
    }

    /// Advances the field by one generation and swaps the buffers.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let [first, second] = &mut self.buffers;
        let (src, dst) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for y in 0..h {
            let rows = [(y + h - 1) % h * w, y * w, (y + 1) % h * w];
            for x in 0..w {
                let cols = [(x + w - 1) % w, x, (x + 1) % w];
                let cell = src[rows[1] + x];
                let neibs = count_neibs(&self.model, src, rows, cols);
                dst[rows[1] + x] = self.model.next_state(cell, neibs);
            }
        }

        self.current ^= 1;
        self.generation += 1;
        log::trace!("{} field advanced to generation {}", M::NAME, self.generation);
    }

    /// Advances the field `n` times.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}

/// Live cells around the center of the 3x3 block given by row offsets and
/// column indices; the center itself is never counted.
fn count_neibs<M: CellModel>(
    model: &M,
    src: &[M::Cell],
    rows: [usize; 3],
    cols: [usize; 3],
) -> u8 {
    let mut neibs = 0u8;
    if M::COUNTS_SELF {
        for row in rows {
            for col in cols {
                neibs += model.is_alive(src[row + col]) as u8;
            }
        }
        neibs -= model.is_alive(src[rows[1] + cols[1]]) as u8;
    } else {
        for (dy, row) in rows.into_iter().enumerate() {
            for (dx, col) in cols.into_iter().enumerate() {
                if dx != 1 || dy != 1 {
                    neibs += model.is_alive(src[row + col]) as u8;
                }
            }
        }
    }
    neibs
}

impl LifeEngine<Aging> {
    /// Age of the cell at (x, y); `0` means dead.
    pub fn age_at(&self, x: usize, y: usize) -> u8 {
        self.cell_at(x, y)
    }

    pub fn color_for_age(&self, age: u8) -> Rgb {
        self.model.color_for_age(age)
    }
}

impl<M: CellModel> fmt::Display for LifeEngine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks_exact(self.width) {
            for &cell in row {
                let c = if self.model.is_alive(cell) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<M: CellModel> Simulation for LifeEngine<M> {
    fn model_name(&self) -> &'static str {
        M::NAME
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        LifeEngine::seed(self, seed)
    }

    fn step(&mut self) {
        LifeEngine::step(self)
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        let cell = self.cell_at(x, y);
        self.model
            .is_alive(cell)
            .then(|| self.model.render_color(cell))
    }

    fn population(&self) -> usize {
        LifeEngine::population(self)
    }

    fn generation(&self) -> u64 {
        LifeEngine::generation(self)
    }
}
