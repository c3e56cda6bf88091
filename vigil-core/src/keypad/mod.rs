//! Keypad layout
//!
//! Fixed 4x3 mapping from matrix position to key, immutable for the
//! process lifetime. The table follows the wiring of the keypad
//! flat-flex, which is why the top row reads 3-2-1 left to right.

/// Number of row lines (inputs, pulled up)
pub const ROWS: usize = 4;

/// Number of column lines (driven low one at a time)
pub const COLS: usize = 3;

/// Key that ends a code-entry session
pub const SUBMIT_KEY: u8 = b'#';

/// Fixed (row, column) -> key mapping
const LAYOUT: [[u8; COLS]; ROWS] = [
    [b'3', b'2', b'1'],
    [b'4', b'5', b'6'],
    [b'7', b'8', b'9'],
    [b'*', b'0', b'#'],
];

/// Look up the key at a matrix position
///
/// Returns `None` for coordinates outside the 4x3 grid.
pub fn key_at(row: usize, col: usize) -> Option<u8> {
    LAYOUT.get(row)?.get(col).copied()
}
