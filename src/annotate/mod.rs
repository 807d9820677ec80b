//! Alignment of checker findings against a colored diff.
//!
//! [`AlignmentMachine`] walks the raw diff lines with a cursor holding the
//! post-change line number of the next content line. When the cursor line has
//! findings, the first one is rendered beside the content line and the rest
//! are stacked beneath it (errors before warnings) before the cursor moves on.

mod machine;

pub use machine::{Advance, AlignmentMachine, State, Step, transition};
