mod coord;

pub use self::coord::Coord;

use std::ops::{Index, IndexMut};

/// A container of elements laid out in rows and columns
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid of the given size and fills it with a value
    pub fn with_value(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![value; width * height],
        }
    }

    /// Creates a grid of the given size, computing each element from its coordinates
    pub fn from_fn(width: usize, height: usize, f: impl FnMut(Coord) -> T) -> Self {
        let elements = (0..height)
            .flat_map(|row| (0..width).map(move |col| Coord::new(row, col)))
            .map(f)
            .collect();
        Self {
            width,
            height,
            elements,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the coordinates are inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.elements[self.index_of(coord)])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on a zero chunk size
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / width, i % width), e))
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "{:?} is outside of a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        coord.row() * self.width + coord.col()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}
