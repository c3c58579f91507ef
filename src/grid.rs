/// A dense 2D grid stored row by row.
///
/// Cells are addressed as `(x, y)` with `x` running along a row. The height,
/// humidity and temperature maps are `Array2D<f32>`; the texture stores its
/// colors in an `Array2D<Color>` of the same dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Array2D<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Array2D {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Create a square `size` x `size` grid
    pub fn square(size: usize, fill: T) -> Self {
        Self::new(size, size, fill)
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Array2D { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Set the value at `(x, y)`. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Value at `(x, y)` with both coordinates clamped into the grid.
    ///
    /// Panics on an empty grid.
    pub fn get_clamped(&self, x: usize, y: usize) -> T {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.data[y * self.width + x]
    }

    /// Iterate over the cells in row order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
