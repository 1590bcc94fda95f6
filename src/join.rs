/*!
Equi-joins and cross joins of frames.

All equi-joins match rows whose key columns hold equal values. The right frame's keys are converted
to the type of the left frame's keys before matching, and NA keys never match anything (not even
another NA). The output holds the key columns once, then the left frame's other columns, then the
right frame's other columns; repeated names are fixed afterward.

Rows come out in left-frame order, with each left row followed by its matches in right-frame order.
Right rows left unmatched by a right or outer join are appended at the end.
*/
use std::fmt;

use indexmap::IndexMap;

use element::Element;
use error::*;
use frame::DataFrame;
use group::KeyPart;
use series::{Series, SeriesData};

/// The kind of join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Rows matched on both sides.
    Inner,
    /// Every left row; unmatched rows hold NA in the right frame's columns.
    Left,
    /// Every right row; unmatched rows hold NA in the left frame's columns.
    Right,
    /// Every row of both sides, NA-filled where unmatched.
    Outer,
    /// Cartesian product (keys are ignored).
    Cross,
}
impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                JoinKind::Inner => "inner",
                JoinKind::Left => "left",
                JoinKind::Right => "right",
                JoinKind::Outer => "outer",
                JoinKind::Cross => "cross",
            }
        )
    }
}
impl JoinKind {
    fn keeps_left(self) -> bool {
        self == JoinKind::Left || self == JoinKind::Outer
    }
    fn keeps_right(self) -> bool {
        self == JoinKind::Right || self == JoinKind::Outer
    }
}

// One output row: the contributing row of each side, or `None` for NA-filled positions.
type RowPair = (Option<usize>, Option<usize>);

fn take(col: &Series, rows: &[Option<usize>]) -> Series {
    let mut data = SeriesData::with_capacity(col.dtype(), rows.len());
    for row in rows {
        match *row {
            Some(i) => data.push(&col.elem(i)),
            None => data.push(&Element::na(col.dtype())),
        }
    }
    Series::from_data(data, col.name())
}

fn take_key(left: &Series, right: &Series, pairs: &[RowPair]) -> Series {
    let mut data = SeriesData::with_capacity(left.dtype(), pairs.len());
    for pair in pairs {
        match *pair {
            (Some(i), _) => data.push(&left.elem(i)),
            (None, Some(j)) => data.push(&right.elem(j)),
            (None, None) => data.push(&Element::na(left.dtype())),
        }
    }
    Series::from_data(data, left.name())
}

fn row_key(keys: &[&Series], row: usize) -> Option<Vec<KeyPart>> {
    let mut key = Vec::with_capacity(keys.len());
    for col in keys {
        match KeyPart::from_element(&col.elem(row)) {
            KeyPart::Na => return None,
            part => key.push(part),
        }
    }
    Some(key)
}

impl DataFrame {
    /// Joins this frame with `right` on the columns named by `keys`, which must exist in both
    /// frames. `keys` is ignored for a cross join.
    pub fn join(&self, right: &DataFrame, kind: JoinKind, keys: &[&str]) -> DataFrame {
        let joined = if kind == JoinKind::Cross {
            self.try_cross_join(right)
        } else {
            self.try_equi_join(right, kind, keys)
        };
        match joined {
            Ok(frame) => {
                debug!("{} join produced {:?} (rows, columns)", kind, frame.dims());
                frame
            }
            Err(err) => DataFrame::from_error(err),
        }
    }
    /// Rows of both frames matched on `keys`.
    pub fn inner_join(&self, right: &DataFrame, keys: &[&str]) -> DataFrame {
        self.join(right, JoinKind::Inner, keys)
    }
    /// Every row of this frame, with matching rows of `right` where present.
    pub fn left_join(&self, right: &DataFrame, keys: &[&str]) -> DataFrame {
        self.join(right, JoinKind::Left, keys)
    }
    /// Every row of `right`, with matching rows of this frame where present.
    pub fn right_join(&self, right: &DataFrame, keys: &[&str]) -> DataFrame {
        self.join(right, JoinKind::Right, keys)
    }
    /// Every row of both frames, matched on `keys` where possible.
    pub fn outer_join(&self, right: &DataFrame, keys: &[&str]) -> DataFrame {
        self.join(right, JoinKind::Outer, keys)
    }
    /// Every combination of a row of this frame with a row of `right`.
    pub fn cross_join(&self, right: &DataFrame) -> DataFrame {
        self.join(right, JoinKind::Cross, &[])
    }

    fn try_equi_join(&self, right: &DataFrame, kind: JoinKind, keys: &[&str]) -> Result<DataFrame> {
        if let Some(err) = self.err().or_else(|| right.err()) {
            return Err(err.clone());
        }
        if keys.is_empty() {
            return Err(TabulaError::JoinKeysNotSpecified);
        }
        let left_keys = keys
            .iter()
            .map(|key| self.try_column(key))
            .collect::<Result<Vec<_>>>()?;
        let right_keys = keys
            .iter()
            .zip(left_keys.iter())
            .map(|(key, left_key)| Ok(right.try_column(key)?.as_type(left_key.dtype())))
            .collect::<Result<Vec<_>>>()?;
        let right_key_refs = right_keys.iter().collect::<Vec<_>>();

        let mut lookup: IndexMap<Vec<KeyPart>, Vec<usize>> = IndexMap::new();
        for j in 0..right.nrows() {
            if let Some(key) = row_key(&right_key_refs, j) {
                lookup.entry(key).or_insert_with(Vec::new).push(j);
            }
        }

        let mut pairs: Vec<RowPair> = vec![];
        let mut right_matched = vec![false; right.nrows()];
        for i in 0..self.nrows() {
            let matches = row_key(&left_keys, i).and_then(|key| lookup.get(&key));
            match matches {
                Some(matches) => {
                    for &j in matches {
                        right_matched[j] = true;
                        pairs.push((Some(i), Some(j)));
                    }
                }
                None => {
                    if kind.keeps_left() {
                        pairs.push((Some(i), None));
                    }
                }
            }
        }
        if kind.keeps_right() {
            pairs.extend(
                right_matched
                    .iter()
                    .enumerate()
                    .filter(|&(_, &matched)| !matched)
                    .map(|(j, _)| (None, Some(j))),
            );
        }

        let left_rows = pairs.iter().map(|pair| pair.0).collect::<Vec<_>>();
        let right_rows = pairs.iter().map(|pair| pair.1).collect::<Vec<_>>();
        let mut columns = left_keys
            .iter()
            .zip(right_keys.iter())
            .map(|(left_key, right_key)| take_key(left_key, right_key, &pairs))
            .collect::<Vec<_>>();
        columns.extend(
            self.columns()
                .iter()
                .filter(|col| !keys.contains(&col.name()))
                .map(|col| take(col, &left_rows)),
        );
        columns.extend(
            right
                .columns()
                .iter()
                .filter(|col| !keys.contains(&col.name()))
                .map(|col| take(col, &right_rows)),
        );
        Ok(DataFrame::new(columns))
    }

    fn try_cross_join(&self, right: &DataFrame) -> Result<DataFrame> {
        if let Some(err) = self.err().or_else(|| right.err()) {
            return Err(err.clone());
        }
        let (nleft, nright) = (self.nrows(), right.nrows());
        let left_rows = (0..nleft)
            .flat_map(|i| ::std::iter::repeat(i).take(nright))
            .collect::<Vec<_>>();
        let right_rows = (0..nleft).flat_map(|_| 0..nright).collect::<Vec<_>>();
        let columns = self
            .columns()
            .iter()
            .map(|col| col.gather(&left_rows))
            .chain(right.columns().iter().map(|col| col.gather(&right_rows)))
            .collect();
        Ok(DataFrame::new(columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use element::DType;
    use test_utils::*;

    #[test]
    fn inner_join_on_bool_key() {
        let (left, right) = join_frames();
        let joined = left.inner_join(&right, &["D"]);
        assert_eq!(joined.nrows(), 8);
        assert_eq!(joined.names(), vec!["D", "A_0", "A_1", "F"]);
        assert_eq!(
            joined.types(),
            vec![DType::Bool, DType::Int, DType::Str, DType::Int]
        );
        assert_eq!(
            joined.col("D").records(),
            vec!["true", "true", "false", "false", "false", "false", "false", "false"]
        );
        assert_eq!(
            joined.col("A_0").records(),
            vec!["1", "2", "3", "3", "3", "1", "1", "1"]
        );
        assert_eq!(
            joined.col("F").records(),
            vec!["1", "1", "2", "8", "9", "2", "8", "9"]
        );
    }

    fn keyed_frames() -> (DataFrame, DataFrame) {
        let left = DataFrame::new(vec![
            Series::new(&[Some(1), Some(2), Some(3), None], DType::Int, "K"),
            Series::new(&["x", "y", "z", "w"], DType::Str, "L"),
        ]);
        let right = DataFrame::new(vec![
            Series::new(&["2", "3", "3", "5"], DType::Str, "K"),
            Series::new(&[10, 20, 30, 40], DType::Int, "R"),
        ]);
        (left, right)
    }

    #[test]
    fn join_kinds() {
        let (left, right) = keyed_frames();

        let inner = left.inner_join(&right, &["K"]);
        assert_eq!(inner.col("K").dtype(), DType::Int);
        assert_eq!(inner.col("K").records(), vec!["2", "3", "3"]);
        assert_eq!(inner.col("R").records(), vec!["10", "20", "30"]);

        let left_join = left.left_join(&right, &["K"]);
        assert_eq!(left_join.col("K").records(), vec!["1", "2", "3", "3", "NaN"]);
        assert_eq!(left_join.col("L").records(), vec!["x", "y", "z", "z", "w"]);
        assert_eq!(left_join.col("R").records(), vec!["NaN", "10", "20", "30", "NaN"]);

        let right_join = left.right_join(&right, &["K"]);
        assert_eq!(right_join.col("K").records(), vec!["2", "3", "3", "5"]);
        assert_eq!(right_join.col("L").records(), vec!["y", "z", "z", "NaN"]);
        assert_eq!(right_join.col("R").records(), vec!["10", "20", "30", "40"]);

        let outer = left.outer_join(&right, &["K"]);
        assert_eq!(outer.nrows(), 6);
        assert_eq!(outer.col("K").records(), vec!["1", "2", "3", "3", "NaN", "5"]);
        assert_eq!(outer.col("L").na_count(), 1);
        assert_eq!(outer.col("R").na_count(), 2);
    }

    #[test]
    fn na_keys_never_match() {
        let left = DataFrame::new(vec![Series::new(&[None::<i64>, Some(1)], DType::Int, "K")]);
        let right = DataFrame::new(vec![
            Series::new(&[None::<i64>, Some(1)], DType::Int, "K"),
            Series::new(&["na", "one"], DType::Str, "V"),
        ]);
        let joined = left.inner_join(&right, &["K"]);
        assert_eq!(joined.col("V").records(), vec!["one"]);
    }

    #[test]
    fn cross_join() {
        let (left, right) = join_frames();
        let crossed = left.cross_join(&right);
        assert_eq!(crossed.dims(), (16, 5));
        assert_eq!(crossed.names(), vec!["A_0", "D_0", "A_1", "F", "D_1"]);
        assert_eq!(
            crossed.col("F").records()[..5].to_vec(),
            vec!["1", "2", "8", "9", "1"]
        );
    }

    #[test]
    fn errors() {
        let (left, right) = join_frames();
        assert_eq!(
            left.inner_join(&right, &[]).err(),
            Some(&TabulaError::JoinKeysNotSpecified)
        );
        assert_eq!(
            left.inner_join(&right, &["F"]).err(),
            Some(&TabulaError::UnknownColumn("F".to_string()))
        );
        let broken = left.subset(99usize);
        assert_eq!(
            broken.cross_join(&right).err(),
            Some(&TabulaError::OutOfRange { index: 99, len: 4 })
        );
    }
}
