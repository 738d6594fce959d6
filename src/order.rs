//! Order acquisition and validation
//!
//! The order comes from one configured source: a value supplied on the
//! command line, or a single interactive prompt on stdin. The first invalid
//! input is terminal; there is no retry loop.

use std::io::{self, BufRead};

use crate::consts::{MAX_ORDER, MIN_ORDER};
use crate::error::Error;

/// A validated square order: odd and within [MIN_ORDER, MAX_ORDER].
///
/// Holding an `Order` is proof the precondition holds, so downstream code
/// never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(usize);

impl Order {
    /// Validate a raw order.
    ///
    /// Oddness is checked before the bounds, so 2 reports "must be odd"
    /// while 1 reports the minimum. Negatives and zero fail one of the two.
    pub fn new(order: i64) -> Result<Self, Error> {
        if order % 2 == 0 {
            return Err(Error::EvenOrder(order));
        }
        if order < MIN_ORDER {
            return Err(Error::OrderTooSmall(order));
        }
        if order > MAX_ORDER {
            return Err(Error::OrderTooLarge(order));
        }
        Ok(Self(order as usize))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Resolve the order from the configured source: the supplied value when
/// present, otherwise a single stdin prompt.
pub fn resolve(supplied: Option<i64>) -> Result<Order, Error> {
    let raw = match supplied {
        Some(v) => v,
        None => prompt()?,
    };
    Order::new(raw)
}

/// Prompt on stdout and read one integer line from stdin.
fn prompt() -> Result<i64, Error> {
    println!("Enter a magic square's size (odd integer >= 3)");
    read_order(io::stdin().lock())
}

/// Read a single integer line from any reader (the testable half of the
/// prompt path).
pub fn read_order(mut reader: impl BufRead) -> Result<i64, Error> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| Error::UnreadableOrder(e.to_string()))?;
    if read == 0 {
        return Err(Error::UnreadableOrder("end of input".into()));
    }
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::UnreadableOrder(format!("not an integer: {trimmed:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_odd_orders_in_range() {
        for n in [3, 5, 7, 99, MAX_ORDER] {
            let order = Order::new(n).unwrap();
            assert_eq!(order.get(), n as usize);
        }
    }

    #[test]
    fn test_rejects_even_orders() {
        for n in [2, 0, -4, 100] {
            assert!(matches!(Order::new(n), Err(Error::EvenOrder(m)) if m == n));
        }
    }

    #[test]
    fn test_rejects_orders_below_minimum() {
        for n in [1, -5, -99] {
            assert!(matches!(Order::new(n), Err(Error::OrderTooSmall(m)) if m == n));
        }
    }

    #[test]
    fn test_rejects_orders_above_maximum() {
        assert!(matches!(
            Order::new(MAX_ORDER + 2),
            Err(Error::OrderTooLarge(_))
        ));
    }

    #[test]
    fn test_read_order_parses_trimmed_line() {
        assert_eq!(read_order(Cursor::new("5\n")).unwrap(), 5);
        assert_eq!(read_order(Cursor::new("  17 \n")).unwrap(), 17);
        assert_eq!(read_order(Cursor::new("-9\n")).unwrap(), -9);
    }

    #[test]
    fn test_read_order_rejects_garbage_and_eof() {
        assert!(matches!(
            read_order(Cursor::new("five\n")),
            Err(Error::UnreadableOrder(_))
        ));
        assert!(matches!(
            read_order(Cursor::new("")),
            Err(Error::UnreadableOrder(_))
        ));
    }

    #[test]
    fn test_resolve_uses_supplied_value() {
        assert_eq!(resolve(Some(9)).unwrap().get(), 9);
        assert!(matches!(resolve(Some(4)), Err(Error::EvenOrder(4))));
    }
}
