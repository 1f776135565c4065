//! Pretty printing utilities.

use core::fmt::{Display, Error as FmtError, Formatter};

/// A slice type that implements the `Display` trait to pretty-print the contained elements.
pub struct PrettySlice<'a, T>(pub &'a [T]);

impl<T: Display> Display for PrettySlice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "[ ")?;
        let mut iter = self.0.iter().peekable();
        while let Some(element) = iter.next() {
            write!(f, "{element}")?;
            if iter.peek().is_some() {
                write!(f, ", ")?;
            }
        }
        write!(f, " ]")
    }
}
