use log::{debug, trace};

use crate::range::{check_points, check_step, samples};
use crate::{bounds, sample_count, Axis, Grid, MeshError, Number, Result};

pub const DEFAULT_PADDING: Number = 0.1;
pub const DEFAULT_STEP: Number = 0.005;

/// How far to extend past the data and how densely to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshOptions {
    /// Margin subtracted from each minimum and added to each maximum.
    /// Negative values shrink the range and are not corrected.
    pub padding: Number,
    /// Spacing between neighbouring samples on both axes.
    pub step: Number,
}

impl MeshOptions {
    #[inline]
    pub fn new(padding: Number, step: Number) -> Self {
        Self { padding, step }
    }

    #[inline]
    pub fn with_padding(mut self, padding: Number) -> Self {
        self.padding = padding;
        self
    }

    #[inline]
    pub fn with_step(mut self, step: Number) -> Self {
        self.step = step;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_step(self.step)?;

        if !self.padding.is_finite() {
            return Err(MeshError::InvalidPadding(self.padding));
        }

        Ok(())
    }
}

impl Default for MeshOptions {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_PADDING, DEFAULT_STEP)
    }
}

/// Every combination of sampled x- and y-values over the padded extent of
/// two features.
///
/// Rows index y-samples and columns index x-samples, so `xx[(i, j)]` is
/// `xs()[j]` and `yy[(i, j)]` is `ys()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    xs: Vec<Number>,
    ys: Vec<Number>,
    xx: Grid,
    yy: Grid,
    options: MeshOptions,
}

impl Mesh {
    pub fn new(x: &[Number], y: &[Number], options: &MeshOptions) -> Result<Self> {
        options.validate()?;

        let (x_min, x_max) = bounds(x, Axis::X)?;
        let (y_min, y_max) = bounds(y, Axis::Y)?;

        let (x_start, x_end) = (x_min - options.padding, x_max + options.padding);
        let (y_start, y_end) = (y_min - options.padding, y_max + options.padding);

        let xs = axis_samples(Axis::X, x_start, x_end, options.step)?;
        let ys = axis_samples(Axis::Y, y_start, y_end, options.step)?;

        let (xx, yy) = meshgrid(&xs, &ys)?;

        debug!(
            "mesh over x [{}, {}), y [{}, {}) with step {}: {} rows x {} cols",
            x_start, x_end, y_start, y_end, options.step, ys.len(), xs.len(),
        );

        Ok(Self {
            xs,
            ys,
            xx,
            yy,
            options: *options,
        })
    }

    /// Mesh over the first two columns of a sample matrix: column 0 is x,
    /// column 1 is y. Further columns are ignored.
    pub fn from_rows(rows: &[impl AsRef<[Number]>], options: &MeshOptions) -> Result<Self> {
        let mut x = Vec::with_capacity(rows.len());
        let mut y = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            match row.as_ref() {
                [first, second, ..] => {
                    x.push(*first);
                    y.push(*second);
                },
                other => {
                    return Err(MeshError::MissingFeature { row: index, columns: other.len() });
                },
            }
        }

        Self::new(&x, &y, options)
    }

    #[inline]
    pub fn xs(&self) -> &[Number] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[Number] {
        &self.ys
    }

    #[inline]
    pub fn xx(&self) -> &Grid {
        &self.xx
    }

    #[inline]
    pub fn yy(&self) -> &Grid {
        &self.yy
    }

    #[inline]
    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    /// `(rows, cols)`, shared by `xx` and `yy`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.xx.shape()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xx.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xx.is_empty()
    }

    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Option<[Number; 2]> {
        Some([*self.xs.get(col)?, *self.ys.get(row)?])
    }

    /// All `[x, y]` points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = [Number; 2]> + '_ {
        self.ys.iter().flat_map(move |&y| self.xs.iter().map(move |&x| [x, y]))
    }

    /// Samples `f(x, y)` at every point, in the mesh's shape.
    pub fn evaluate(&self, mut f: impl FnMut(Number, Number) -> Number) -> Grid {
        Grid::from_fn(self.ys.len(), self.xs.len(), |row, col| f(self.xs[col], self.ys[row]))
    }

    #[inline]
    pub fn into_parts(self) -> (Grid, Grid) {
        (self.xx, self.yy)
    }
}

/// Samples one axis of a mesh. A zero or inverted span still yields its
/// lower bound, so a single repeated data value produces one sample.
fn axis_samples(axis: Axis, start: Number, end: Number, step: Number) -> Result<Vec<Number>> {
    let count = sample_count(start, end, step)?.max(1);

    trace!("{} axis: {} samples from {} below {}", axis, count, start, end);

    Ok(samples(start, step, count))
}

/// Expands sampled axes into coordinate grids, one row per y-sample.
pub fn meshgrid(xs: &[Number], ys: &[Number]) -> Result<(Grid, Grid)> {
    if xs.is_empty() {
        return Err(MeshError::EmptyInput { axis: Axis::X });
    }
    if ys.is_empty() {
        return Err(MeshError::EmptyInput { axis: Axis::Y });
    }

    let (rows, cols) = (ys.len(), xs.len());
    check_points((rows as u64).saturating_mul(cols as u64))?;

    let xx = Grid::from_fn(rows, cols, |_, col| xs[col]);
    let yy = Grid::from_fn(rows, cols, |row, _| ys[row]);

    Ok((xx, yy))
}

/// Coordinate grids covering `x` and `y` extended by `padding`, sampled every
/// `h`. Returns `(xx, yy)`.
pub fn make_mesh(x: &[Number], y: &[Number], padding: Number, h: Number) -> Result<(Grid, Grid)> {
    Mesh::new(x, y, &MeshOptions::new(padding, h)).map(Mesh::into_parts)
}

/// [`make_mesh`] with padding `0.1` and step `0.005`.
#[inline]
pub fn make_mesh_default(x: &[Number], y: &[Number]) -> Result<(Grid, Grid)> {
    make_mesh(x, y, DEFAULT_PADDING, DEFAULT_STEP)
}
