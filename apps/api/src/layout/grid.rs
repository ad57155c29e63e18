//! Grid Layout Engine: the single source of truth for letter placement.
//!
//! Both the interactive preview and the SVG exporter derive their geometry from
//! this module, so the two paths cannot drift apart.
//!
//! # Shape rules
//! - 1 letter  → 1×1, rendered at the large item size
//! - 2 letters → 2 columns, 1 row
//! - 3+ letters → 2 columns, `ceil(len / 2)` rows; an odd length leaves a
//!   trailing item that sits left-aligned in the last row
//!
//! All functions are pure and recompute from the word length on every call.

use serde::{Deserialize, Serialize};

use crate::flags::letter::Letter;

/// Native coordinate space of every glyph asset (square, in SVG user units).
pub const GLYPH_NATIVE_SIZE: f64 = 1080.0;

/// Item edge for a lone letter.
pub const SINGLE_ITEM_SIZE: u32 = 300;
/// Item edge when the word has two or more letters.
pub const GRID_ITEM_SIZE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
    pub has_odd_trailing_item: bool,
    pub single_letter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridItem {
    pub letter: Letter,
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub is_trailing_odd: bool,
}

/// Pixel/user-unit sizing paired with a `GridSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemSizing {
    pub item_size: u32,
    pub container_width: u32,
    pub container_height: u32,
}

impl ItemSizing {
    pub fn for_spec(spec: &GridSpec) -> Self {
        let item_size = if spec.single_letter {
            SINGLE_ITEM_SIZE
        } else {
            GRID_ITEM_SIZE
        };
        Self {
            item_size,
            container_width: spec.columns * item_size,
            container_height: spec.rows * item_size,
        }
    }

    /// Scale factor mapping the glyph's native space onto one grid cell.
    pub fn glyph_scale(&self) -> f64 {
        f64::from(self.item_size) / GLYPH_NATIVE_SIZE
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core computation
// ────────────────────────────────────────────────────────────────────────────

/// Grid shape for a word of `length` letters. `length == 0` yields an empty 0×0 grid.
pub fn compute_grid_spec(length: usize) -> GridSpec {
    match length {
        0 => GridSpec {
            columns: 0,
            rows: 0,
            has_odd_trailing_item: false,
            single_letter: false,
        },
        1 => GridSpec {
            columns: 1,
            rows: 1,
            has_odd_trailing_item: false,
            single_letter: true,
        },
        2 => GridSpec {
            columns: 2,
            rows: 1,
            has_odd_trailing_item: false,
            single_letter: false,
        },
        _ => {
            let has_odd = length % 2 != 0;
            let full_rows = (length / 2) as u32;
            GridSpec {
                columns: 2,
                rows: full_rows + u32::from(has_odd),
                has_odd_trailing_item: has_odd,
                single_letter: false,
            }
        }
    }
}

/// Position of the item at `index` in a word of `length` letters.
///
/// The trailing odd item is pinned to column 0 of the last row; everything else
/// is row-major.
pub fn compute_item_position(letter: Letter, index: usize, length: usize, spec: &GridSpec) -> GridItem {
    let is_trailing_odd = spec.has_odd_trailing_item && index + 1 == length;
    let (row, col) = if is_trailing_odd {
        (spec.rows - 1, 0)
    } else {
        let columns = spec.columns.max(1) as usize;
        ((index / columns) as u32, (index % columns) as u32)
    };
    GridItem {
        letter,
        index,
        row,
        col,
        is_trailing_odd,
    }
}

/// Grid shape plus every item position for a word, in index order.
pub fn layout_letters(letters: &[Letter]) -> (GridSpec, Vec<GridItem>) {
    let spec = compute_grid_spec(letters.len());
    let items = letters
        .iter()
        .enumerate()
        .map(|(i, &l)| compute_item_position(l, i, letters.len(), &spec))
        .collect();
    (spec, items)
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas placement
// ────────────────────────────────────────────────────────────────────────────

/// Grid centered on a square canvas of `canvas_size` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlacement {
    pub start_x: f64,
    pub start_y: f64,
    pub item_size: f64,
}

impl CanvasPlacement {
    pub fn centered(canvas_size: f64, sizing: &ItemSizing) -> Self {
        Self {
            start_x: (canvas_size - f64::from(sizing.container_width)) / 2.0,
            start_y: (canvas_size - f64::from(sizing.container_height)) / 2.0,
            item_size: f64::from(sizing.item_size),
        }
    }

    /// Top-left corner of `item` on the canvas. The trailing odd item hugs the left edge.
    pub fn origin_of(&self, item: &GridItem) -> (f64, f64) {
        let x = if item.is_trailing_odd {
            self.start_x
        } else {
            self.start_x + f64::from(item.col) * self.item_size
        };
        let y = self.start_y + f64::from(item.row) * self.item_size;
        (x, y)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::letter::Word;

    fn letters(s: &str) -> Vec<Letter> {
        Word::parse(s, 10).unwrap().letters().to_vec()
    }

    #[test]
    fn test_single_letter_spec() {
        let spec = compute_grid_spec(1);
        assert_eq!(spec.columns, 1);
        assert_eq!(spec.rows, 1);
        assert!(spec.single_letter);
        assert!(!spec.has_odd_trailing_item);
    }

    #[test]
    fn test_two_letters_one_row() {
        let spec = compute_grid_spec(2);
        assert_eq!((spec.columns, spec.rows), (2, 1));
        assert!(!spec.has_odd_trailing_item);
        assert!(!spec.single_letter);
    }

    #[test]
    fn test_three_letters_trailing_item_left_aligned() {
        let spec = compute_grid_spec(3);
        assert_eq!((spec.columns, spec.rows), (2, 2));
        assert!(spec.has_odd_trailing_item);

        let l = letters("T")[0];
        let item = compute_item_position(l, 2, 3, &spec);
        assert_eq!((item.row, item.col), (1, 0));
        assert!(item.is_trailing_odd);
    }

    #[test]
    fn test_four_letters_square() {
        let spec = compute_grid_spec(4);
        assert_eq!((spec.columns, spec.rows), (2, 2));
        assert!(!spec.has_odd_trailing_item);
    }

    #[test]
    fn test_five_letters() {
        let spec = compute_grid_spec(5);
        assert_eq!((spec.columns, spec.rows), (2, 3));
        assert!(spec.has_odd_trailing_item);

        let l = letters("E")[0];
        let item = compute_item_position(l, 4, 5, &spec);
        assert_eq!((item.row, item.col), (2, 0));
    }

    #[test]
    fn test_rows_cover_every_length() {
        for len in 3..=10 {
            let spec = compute_grid_spec(len);
            assert_eq!(spec.columns, 2);
            assert_eq!(spec.rows as usize, len.div_ceil(2), "len {len}");
            assert_eq!(spec.has_odd_trailing_item, len % 2 == 1);
        }
    }

    #[test]
    fn test_positions_are_unique_and_in_bounds() {
        for len in 1..=10 {
            let word: String = "ABCDEFGHIJ".chars().take(len).collect();
            let (spec, items) = layout_letters(&letters(&word));
            let mut seen = std::collections::HashSet::new();
            for item in &items {
                assert!(item.row < spec.rows && item.col < spec.columns);
                assert!(seen.insert((item.row, item.col)), "overlap at len {len}");
            }
            assert_eq!(items.len(), len);
        }
    }

    #[test]
    fn test_cat_positions() {
        let (spec, items) = layout_letters(&letters("CAT"));
        assert_eq!((spec.columns, spec.rows, spec.has_odd_trailing_item), (2, 2, true));
        let pos: Vec<(char, u32, u32)> = items
            .iter()
            .map(|i| (i.letter.as_char(), i.row, i.col))
            .collect();
        assert_eq!(pos, vec![('C', 0, 0), ('A', 0, 1), ('T', 1, 0)]);
    }

    #[test]
    fn test_sizing_policy() {
        let single = ItemSizing::for_spec(&compute_grid_spec(1));
        assert_eq!(single.item_size, 300);
        assert_eq!((single.container_width, single.container_height), (300, 300));

        let five = ItemSizing::for_spec(&compute_grid_spec(5));
        assert_eq!(five.item_size, 100);
        assert_eq!((five.container_width, five.container_height), (200, 300));
    }

    #[test]
    fn test_canvas_placement_centers_grid() {
        let (spec, items) = layout_letters(&letters("CAT"));
        let placement = CanvasPlacement::centered(1000.0, &ItemSizing::for_spec(&spec));
        assert_eq!((placement.start_x, placement.start_y), (400.0, 400.0));

        let origins: Vec<(f64, f64)> = items.iter().map(|i| placement.origin_of(i)).collect();
        assert_eq!(origins, vec![(400.0, 400.0), (500.0, 400.0), (400.0, 500.0)]);
    }

    #[test]
    fn test_canvas_placement_single_letter() {
        let (spec, items) = layout_letters(&letters("Z"));
        let placement = CanvasPlacement::centered(1000.0, &ItemSizing::for_spec(&spec));
        assert_eq!(placement.origin_of(&items[0]), (350.0, 350.0));
    }

    #[test]
    fn test_glyph_scale() {
        let sizing = ItemSizing::for_spec(&compute_grid_spec(2));
        assert_eq!(sizing.glyph_scale(), 100.0 / 1080.0);
    }
}
