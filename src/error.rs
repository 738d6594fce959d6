//! Crate-wide error type
//!
//! Every failure here is terminal: the caller reports one diagnostic line
//! and exits nonzero. Validation failures come from order checking, resource
//! failures from the grid allocation or the output file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::consts::{MAX_ORDER, MIN_ORDER};

#[derive(Debug, Error)]
pub enum Error {
    /// The requested order is even; the Siamese method needs an odd order.
    #[error("size must be odd, got {0}")]
    EvenOrder(i64),

    /// The requested order is below the minimum (also covers 0 and negatives).
    #[error("size must be at least {MIN_ORDER}, got {0}")]
    OrderTooSmall(i64),

    /// The requested order would overflow the cell type.
    #[error("size must be at most {MAX_ORDER}, got {0}")]
    OrderTooLarge(i64),

    /// Stdin closed, unreadable, or the line was not an integer.
    #[error("could not read a size from input: {0}")]
    UnreadableOrder(String),

    /// The grid buffer could not be allocated.
    #[error("cannot allocate a grid of {cells} cells")]
    Allocation { cells: usize },

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot finish writing {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A square file did not match the expected format.
    #[error("{}: line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}
