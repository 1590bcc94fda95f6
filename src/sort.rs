//! Multi-key sorting of frames.

use std::cmp::Ordering;

use error::*;
use frame::DataFrame;
use permute::compare_positions;

/// One sort key: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    colname: String,
    reverse: bool,
}
impl Order {
    /// Ascending order on `colname`.
    pub fn sort(colname: &str) -> Order {
        Order {
            colname: colname.to_string(),
            reverse: false,
        }
    }
    /// Descending order on `colname`.
    pub fn rev_sort(colname: &str) -> Order {
        Order {
            colname: colname.to_string(),
            reverse: true,
        }
    }
    /// Column sorted on.
    pub fn colname(&self) -> &str {
        &self.colname
    }
    /// Whether this key sorts descending.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

impl DataFrame {
    /// Sorts rows by `orders`; later keys break ties of earlier ones. The sort is stable, and NA
    /// values sort last in either direction.
    pub fn arrange(&self, orders: &[Order]) -> DataFrame {
        match self.try_arrange(orders) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_arrange(&self, orders: &[Order]) -> Result<DataFrame> {
        if let Some(err) = self.err() {
            return Err(err.clone());
        }
        if orders.is_empty() {
            return Err(TabulaError::NoArguments);
        }
        let keys = orders
            .iter()
            .map(|order| Ok((self.try_column(&order.colname)?.data(), order.reverse)))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "arranging {} rows by {:?}",
            self.nrows(),
            orders.iter().map(|o| o.colname.as_str()).collect::<Vec<_>>()
        );

        let mut perm = (0..self.nrows()).collect::<Vec<_>>();
        perm.sort_by(|&left, &right| {
            keys.iter()
                .map(|&(data, reverse)| compare_positions(data, left, right, reverse))
                .find(|&ord| ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        Ok(self.gather_rows(&perm))
    }
}
