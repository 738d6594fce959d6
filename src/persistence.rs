//! Save/load of the square file format
//!
//! Format: first line is the order n, then n lines of n comma-separated
//! cell values, no trailing comma, every line newline-terminated. Saving
//! creates or truncates the destination; create, write, and close failures
//! are each reported and all fatal.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::order::Order;
use crate::square::MagicSquare;

/// Write a square to `path`, overwriting any existing file.
pub fn save(square: &MagicSquare, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_square(&mut writer, square).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    // Buffered bytes and close-time failures must not be dropped silently
    let file = writer.into_inner().map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|source| Error::Close {
        path: path.to_path_buf(),
        source,
    })
}

fn write_square(writer: &mut impl Write, square: &MagicSquare) -> std::io::Result<()> {
    writeln!(writer, "{}", square.order())?;
    for row in square.rows() {
        let cells: Vec<String> = row.iter().map(u32::to_string).collect();
        writeln!(writer, "{}", cells.join(","))?;
    }
    Ok(())
}

/// Read a square file back.
///
/// The header must carry a valid odd order and every row must have exactly
/// n parseable cells; anything else is rejected with the offending line
/// number.
pub fn load(path: &Path) -> Result<MagicSquare, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines();

    let malformed = |line: usize, reason: String| Error::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let header = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => return Err(malformed(1, e.to_string())),
        None => return Err(malformed(1, "missing order line".into())),
    };
    let raw: i64 = header
        .trim()
        .parse()
        .map_err(|_| malformed(1, format!("not an order: {header:?}")))?;
    let order = Order::new(raw)?;
    let n = order.get();

    let mut square = MagicSquare::zeroed(order)?;
    for row in 0..n {
        let line_no = row + 2;
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(malformed(line_no, e.to_string())),
            None => return Err(malformed(line_no, format!("missing row {}", row + 1))),
        };

        let mut filled = 0;
        for (col, cell) in line.trim().split(',').enumerate() {
            if col >= n {
                return Err(malformed(line_no, format!("expected {n} cells per row")));
            }
            let value: u32 = cell
                .trim()
                .parse()
                .map_err(|_| malformed(line_no, format!("not a cell value: {cell:?}")))?;
            square.set(row, col, value);
            filled = col + 1;
        }
        if filled != n {
            return Err(malformed(
                line_no,
                format!("expected {n} cells per row, found {filled}"),
            ));
        }
    }

    Ok(square)
}
