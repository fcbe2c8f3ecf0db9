/// Grid cell of the source image a tile shows. Derived from the canonical
/// index only, so a tile keeps its picture wherever it is moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageOffset {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl ImageOffset {
    pub fn for_index(index: usize, rows: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
            rows,
            cols,
        }
    }

    /// Fractional region `(x, y, w, h)` of the source image, each in `[0, 1]`.
    pub fn region(&self) -> (f64, f64, f64, f64) {
        let w = 1.0 / self.cols as f64;
        let h = 1.0 / self.rows as f64;
        (self.col as f64 * w, self.row as f64 * h, w, h)
    }

    /// Region in source pixels for an image of the given size.
    pub fn pixel_rect(&self, width: u32, height: u32) -> (f64, f64, f64, f64) {
        let (x, y, w, h) = self.region();
        let (iw, ih) = (width as f64, height as f64);
        (x * iw, y * ih, w * iw, h * ih)
    }

    /// CSS `background-size` scaling the whole image to `cols × rows` tiles.
    pub fn css_background_size(&self) -> String {
        format!("{}% {}%", self.cols * 100, self.rows * 100)
    }

    /// CSS `background-position` showing exactly this tile's region.
    ///
    /// Percentages align the same relative point of image and box, so the
    /// last column sits at 100%, not at `-(cols-1)*100%`.
    pub fn css_background_position(&self) -> String {
        format!(
            "{} {}",
            percent(axis_position(self.col, self.cols)),
            percent(axis_position(self.row, self.rows))
        )
    }
}

fn axis_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 * 100.0 / (count - 1) as f64
    }
}

fn percent(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}%", v.round() as i64)
    } else {
        format!("{v:.4}%")
    }
}

/// One rectangular piece of the captured image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    canonical_index: usize,
    pub(crate) current_slot: usize,
    offset: ImageOffset,
}

impl Tile {
    pub(crate) fn new(canonical_index: usize, rows: usize, cols: usize) -> Self {
        Self {
            canonical_index,
            current_slot: canonical_index,
            offset: ImageOffset::for_index(canonical_index, rows, cols),
        }
    }

    pub fn canonical_index(&self) -> usize {
        self.canonical_index
    }

    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    pub fn offset(&self) -> ImageOffset {
        self.offset
    }

    pub fn is_home(&self) -> bool {
        self.current_slot == self.canonical_index
    }
}
