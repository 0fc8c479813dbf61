//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. Every function expression is
/// evaluated once, when the composition is built. Stateful `FnMut` closures
/// are accepted; the composition is then `FnMut` as well.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use fnkit::compose;
///
/// let parse_second = compose!(
///     |number: f64| number * 2.0,
///     |field: &str| field.parse::<f64>().unwrap_or(0.0),
///     |line: &'static str| line.split_whitespace().nth(1).unwrap_or_default(),
/// );
/// assert_eq!(parse_second("-- 2.5 --"), 5.0);
/// ```
///
/// The innermost function takes a single argument; compose with
/// [`star`](crate::compose::star) to start from a binary function:
///
/// ```
/// use fnkit::compose;
/// use fnkit::compose::star;
///
/// let hypotenuse = compose!(f64::sqrt, star(|a: f64, b: f64| a * a + b * b));
/// assert_eq!(hypotenuse((3.0, 4.0)), 5.0);
/// ```
#[macro_export]
macro_rules! compose {
    (@reverse [$head:expr $(, $tail:expr)*] [$($reversed:expr),*]) => {
        $crate::compose!(@reverse [$($tail),*] [$head $(, $reversed)*])
    };
    (@reverse [] [$first:expr $(, $then:expr)*]) => {
        $crate::compose!(@then $first; $($then),*)
    };
    (@then $composed:expr;) => {
        $composed
    };
    (@then $composed:expr; $next:expr $(, $rest:expr)*) => {
        $crate::compose!(@then {
            #[allow(unused_mut)]
            let mut previous = $composed;
            #[allow(unused_mut)]
            let mut next = $next;
            move |input| next(previous(input))
        }; $($rest),*)
    };
    ($($function:expr),+ $(,)?) => {
        $crate::compose!(@reverse [$($function),+] [])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single_returns_function() {
        let double = |x: i32| x * 2;
        assert_eq!(compose!(double)(4), 8);
    }

    #[test]
    fn test_compose_applies_rightmost_first() {
        let add_ten = |x: i32| x + 10;
        let square = |x: i32| x * x;
        assert_eq!(compose!(square, add_ten)(2), 144);
        assert_eq!(compose!(add_ten, square)(2), 14);
    }

    #[test]
    fn test_compose_evaluates_functions_once() {
        let mut built = 0;
        let composed = compose!(
            {
                built += 1;
                |x: i32| x - 1
            },
            |x: i32| x * 3
        );
        assert_eq!(composed(2), 5);
        assert_eq!(composed(3), 8);
        assert_eq!(built, 1);
    }

    #[test]
    fn test_compose_with_stateful_closure() {
        let mut total = 0;
        let mut running_total = compose!(|sum: i32| sum * 10, |x: i32| {
            total += x;
            total
        });
        assert_eq!(running_total(1), 10);
        assert_eq!(running_total(2), 30);
    }
}
