//! The `pipe!` macro.

/// Threads a value through functions from left to right.
///
/// `pipe!(x => f, g, h)` is `h(g(f(x)))`. `pipe!(x)` is `x`.
///
/// # Laws
///
/// - **Consistency with compose**: `pipe!(x => f, g) == compose!(g, f)(x)`
///
/// # Examples
///
/// ```
/// use fnkit::pipe;
///
/// let length = pipe!("  padded  " => str::trim, str::len);
/// assert_eq!(length, 6);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr => $($function:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($function)(value);
        )+
        value
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_without_functions() {
        assert_eq!(pipe!(7), 7);
    }

    #[test]
    fn test_pipe_left_to_right() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(pipe!(5 => double, add_one), 11);
        assert_eq!(pipe!(5 => add_one, double), 12);
    }
}
