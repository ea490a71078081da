//! 文字棋盤
//!
//! ```text
//!     1   2   3   4   5
//!   +---+---+---+---+---+
//! A | ○ | ○ | ○ | ○ | ○ |
//!   +---+---+---+---+---+
//! ```

use crate::logic::board::NeutronBoard;
use std::fmt;

const ROW_LABELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

impl fmt::Display for NeutronBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.grid()[0].len();
        let separator = format!("  +{}", "---+".repeat(width));

        let header: Vec<String> = (1..=width).map(|col| col.to_string()).collect();
        writeln!(f, "    {}", header.join("   "))?;
        writeln!(f, "{separator}")?;

        for (label, row) in ROW_LABELS.iter().zip(self.grid()) {
            write!(f, "{label} |")?;
            for cell in row {
                write!(f, " {} |", cell.glyph())?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
