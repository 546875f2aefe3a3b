use thiserror::Error;

/// Largest width or height a field may have.
pub const MAX_FIELD_SIZE: u32 = 255;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field size {width}x{height} is outside 1..=255")]
    BadSize { width: u32, height: u32 },
}

/// Trail-age grid. 0 is empty; any positive value is snake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        if !(1..=MAX_FIELD_SIZE).contains(&width) || !(1..=MAX_FIELD_SIZE).contains(&height) {
            return Err(FieldError::BadSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
        })
    }

    /// Field dimensions for a canvas, keeping one tile row for the status bar.
    /// Always within `1..=MAX_FIELD_SIZE`.
    pub fn size_for_canvas(canvas_width: u32, canvas_height: u32, tile_size: u32) -> (u32, u32) {
        let tile = tile_size.max(1);
        let width = (canvas_width / tile).clamp(1, MAX_FIELD_SIZE);
        let height = (canvas_height / tile).saturating_sub(1).clamp(1, MAX_FIELD_SIZE);
        (width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Converts signed coordinates into a cell if they lie inside the field.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(Cell::new(x as u32, y as u32))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    /// Cells outside the field read as empty.
    pub fn get(&self, cell: Cell) -> u32 {
        if !self.contains(cell) {
            return 0;
        }
        self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, value: u32) {
        if self.contains(cell) {
            let i = self.index(cell);
            self.cells[i] = value;
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell) > 0
    }

    /// One trail-decay step over every cell.
    pub fn decay(&mut self) {
        for v in &mut self.cells {
            *v = v.saturating_sub(1);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// All cells with their trail age, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Cell::new(i as u32 % width, i as u32 / width), v))
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter().filter(|&(_, v)| v == 0).map(|(c, _)| c)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(Field::new(0, 5).is_err());
        assert!(Field::new(5, 256).is_err());
        assert!(Field::new(255, 255).is_ok());
    }

    #[test]
    fn test_size_for_canvas() {
        assert_eq!(Field::size_for_canvas(160, 144, 16), (10, 8));
        assert_eq!(Field::size_for_canvas(8, 8, 16), (1, 1));
        assert_eq!(Field::size_for_canvas(10_000, 10_000, 1), (255, 255));
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut field = Field::new(3, 2).unwrap();
        field.set(Cell::new(0, 0), 2);
        field.set(Cell::new(2, 1), 1);
        field.decay();
        assert_eq!(field.get(Cell::new(0, 0)), 1);
        assert_eq!(field.get(Cell::new(2, 1)), 0);
        field.decay();
        assert_eq!(field.get(Cell::new(0, 0)), 0);
        assert!(field.iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_cell_at_bounds() {
        let field = Field::new(4, 3).unwrap();
        assert_eq!(field.cell_at(3, 2), Some(Cell::new(3, 2)));
        assert_eq!(field.cell_at(4, 0), None);
        assert_eq!(field.cell_at(0, -1), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut field = Field::new(3, 2).unwrap();
        field.set(Cell::new(1, 1), 7);
        let hit: Vec<_> = field.iter().filter(|&(_, v)| v > 0).collect();
        assert_eq!(hit, vec![(Cell::new(1, 1), 7)]);
        assert_eq!(field.free_cells().count(), 5);
    }
}
