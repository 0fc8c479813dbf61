//! Unary adapters over slices.
//!
//! Each adapter fixes the item and takes the sequence as its parameter, so
//! it accepts anything that views as a slice (`Vec<T>`, arrays, `[T]`).
//! [`split1`] and [`splitn1`] do the same for string separators.

/// Returns `|sequence| sequence contains item`.
///
/// # Examples
///
/// ```rust
/// use fnkit::operator::contains1;
///
/// let rows = vec![vec![1, 2], vec![3, 4]];
/// let with_three: Vec<&Vec<i32>> = rows.iter().filter(|row| contains1(3)(*row)).collect();
/// assert_eq!(with_three, vec![&vec![3, 4]]);
/// ```
pub fn contains1<T, C>(item: T) -> impl Fn(&C) -> bool
where
    T: PartialEq,
    C: AsRef<[T]> + ?Sized,
{
    move |sequence: &C| sequence.as_ref().contains(&item)
}

/// Returns `|sequence| number of elements equal to item`.
pub fn count_of1<T, C>(item: T) -> impl Fn(&C) -> usize
where
    T: PartialEq,
    C: AsRef<[T]> + ?Sized,
{
    move |sequence: &C| {
        sequence
            .as_ref()
            .iter()
            .filter(|element| **element == item)
            .count()
    }
}

/// Returns `|sequence| index of the first element equal to item`.
///
/// # Examples
///
/// ```rust
/// use fnkit::operator::index_of1;
///
/// assert_eq!(index_of1('c')(&['a', 'b', 'c']), Some(2));
/// assert_eq!(index_of1('z')(&['a', 'b', 'c']), None);
/// ```
pub fn index_of1<T, C>(item: T) -> impl Fn(&C) -> Option<usize>
where
    T: PartialEq,
    C: AsRef<[T]> + ?Sized,
{
    move |sequence: &C| sequence.as_ref().iter().position(|element| *element == item)
}

/// Returns `|sequence| a copy of sequence[index]`, or `None` when out of bounds.
pub fn getitem1<T, C>(index: usize) -> impl Fn(&C) -> Option<T>
where
    T: Clone,
    C: AsRef<[T]> + ?Sized,
{
    move |sequence: &C| sequence.as_ref().get(index).cloned()
}

/// Returns `|text| text split on separator`.
///
/// # Examples
///
/// ```rust
/// use fnkit::operator::split1;
///
/// let fields: Vec<Vec<&str>> = ["a,b", "c"].into_iter().map(split1(",")).collect();
/// assert_eq!(fields, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn split1(separator: &str) -> impl Fn(&str) -> Vec<&str> {
    move |text| text.split(separator).collect()
}

/// Returns `|text| text split on separator into at most count pieces`.
///
/// The last piece holds the unsplit remainder.
pub fn splitn1(count: usize, separator: &str) -> impl Fn(&str) -> Vec<&str> {
    move |text| text.splitn(count, separator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("key=value", vec!["key", "value"])]
    #[case("key=value=more", vec!["key", "value=more"])]
    #[case("flag", vec!["flag"])]
    fn test_splitn1_keeps_remainder(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(splitn1(2, "=")(text), expected);
    }

    #[rstest]
    fn test_split1_keeps_empty_fields() {
        let separator = String::from("::");
        let split = split1(&separator);
        assert_eq!(split("a::::b"), vec!["a", "", "b"]);
    }
}
