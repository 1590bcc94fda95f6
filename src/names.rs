//! Column-name normalization.

use indexmap::IndexMap;

/// Makes every name in `names` unique and non-empty.
///
/// Empty names become `X0`, `X1`, ..., skipping identifiers already in use. Then each group of
/// duplicated names, taken in sorted order, is renamed `name_0`, `name_1`, ..., again skipping
/// names already in use. A list of unique, non-empty names is left unchanged.
pub fn fix_column_names(names: &mut [String]) {
    let mut missing = vec![];
    let mut places: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            missing.push(i);
        } else {
            places.entry(name.clone()).or_insert_with(Vec::new).push(i);
        }
    }

    let mut counter = 0;
    for i in missing {
        let mut proposed = format!("X{}", counter);
        while names.contains(&proposed) {
            counter += 1;
            proposed = format!("X{}", counter);
        }
        names[i] = proposed;
        counter += 1;
    }

    let mut duplicated = places
        .into_iter()
        .filter(|&(_, ref idxs)| idxs.len() > 1)
        .collect::<Vec<_>>();
    duplicated.sort_by(|left, right| left.0.cmp(&right.0));
    for (name, idxs) in duplicated {
        let mut counter = 0;
        for i in idxs {
            let mut proposed = format!("{}_{}", name, counter);
            while names.contains(&proposed) {
                counter += 1;
                proposed = format!("{}_{}", name, counter);
            }
            names[i] = proposed;
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(names: &[&str]) -> Vec<String> {
        let mut names = names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        fix_column_names(&mut names);
        names
    }

    #[test]
    fn fill_missing() {
        assert_eq!(fixed(&["", "A", ""]), vec!["X0", "A", "X1"]);
        assert_eq!(fixed(&["", "X0", ""]), vec!["X1", "X0", "X2"]);
    }

    #[test]
    fn duplicates() {
        assert_eq!(fixed(&["D", "A", "A", "F"]), vec!["D", "A_0", "A_1", "F"]);
        assert_eq!(
            fixed(&["b", "a", "b", "a_0", "a"]),
            vec!["b_0", "a_1", "b_1", "a_0", "a_2"]
        );
    }

    #[test]
    fn idempotent() {
        let once = fixed(&["x", "", "x", "y", "", "X0"]);
        let mut twice = once.clone();
        fix_column_names(&mut twice);
        assert_eq!(once, twice);
        assert_eq!(fixed(&["A", "B", "C"]), vec!["A", "B", "C"]);
    }
}
