// Textual rendering of diff segments.
//
// - `mode`   - the parsed `Mode` selector (full / compact / full:N)
// - `format` - bracket-notation output for a segment list

pub mod format;
pub mod mode;

pub use format::{render, render_into};
pub use mode::Mode;
