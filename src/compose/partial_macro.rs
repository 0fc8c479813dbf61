//! The `partial!` macro.

/// Fixes some arguments of a function, leaving the `__` positions open.
///
/// `partial!(f, a, __, c)` is `move |b| f(a.clone(), b, c.clone())`. Fixed
/// arguments are evaluated once, when the partial application is built, and
/// cloned on every call, so they must implement [`Clone`]. With no `__`
/// the result is a zero-argument closure. Up to twelve arguments are
/// supported.
///
/// Write `__` as a bare token; it is matched literally and must not be
/// imported.
///
/// # Examples
///
/// ## Fixing leading or trailing arguments
///
/// ```
/// use fnkit::partial;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let from_ten = partial!(subtract, 10, __);
/// let minus_one = partial!(subtract, __, 1);
///
/// assert_eq!(from_ten(3), 7);
/// assert_eq!(minus_one(10), 9);
/// ```
///
/// ## Several open positions
///
/// ```
/// use fnkit::partial;
///
/// fn clamp(low: i32, value: i32, high: i32) -> i32 { value.max(low).min(high) }
///
/// let clamp_between = partial!(clamp, __, 15, __);
/// assert_eq!(clamp_between(0, 10), 10);
/// assert_eq!(clamp_between(20, 30), 20);
/// ```
///
/// ## A thunk
///
/// ```
/// use fnkit::partial;
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}!") }
///
/// let hello_rust = partial!(greet, "Hello", "Rust");
/// assert_eq!(hello_rust(), "Hello, Rust!");
/// ```
#[macro_export]
macro_rules! partial {
    (@build $function:expr; [$($pool:ident)*]; [$($bindings:tt)*]; [$($parameter:ident)*]; [$($argument:expr),*];) => {{
        let function = $function;
        $($bindings)*
        move |$($parameter),*| function($($argument),*)
    }};
    (@build $function:expr; [$name:ident $($pool:ident)*]; [$($bindings:tt)*]; [$($parameter:ident)*]; [$($argument:expr),*]; __ $(, $($rest:tt)*)?) => {
        $crate::partial!(@build $function;
            [$($pool)*];
            [$($bindings)*];
            [$($parameter)* $name];
            [$($argument,)* $name];
            $($($rest)*)?)
    };
    (@build $function:expr; [$name:ident $($pool:ident)*]; [$($bindings:tt)*]; [$($parameter:ident)*]; [$($argument:expr),*]; $value:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(@build $function;
            [$($pool)*];
            [$($bindings)* let $name = $value;];
            [$($parameter)*];
            [$($argument,)* ::core::clone::Clone::clone(&$name)];
            $($($rest)*)?)
    };
    ($function:expr, $($arguments:tt)+) => {
        $crate::partial!(@build $function;
            [argument0 argument1 argument2 argument3 argument4 argument5
             argument6 argument7 argument8 argument9 argument10 argument11];
            [];
            [];
            [];
            $($arguments)+)
    };
}

#[cfg(test)]
mod tests {
    fn join(first: &str, second: &str, third: &str) -> String {
        format!("{first}-{second}-{third}")
    }

    #[test]
    fn test_partial_middle_fixed() {
        let around_b = partial!(join, __, "b", __);
        assert_eq!(around_b("a", "c"), "a-b-c");
    }

    #[test]
    fn test_partial_all_open() {
        let same = partial!(join, __, __, __);
        assert_eq!(same("x", "y", "z"), "x-y-z");
    }

    #[test]
    fn test_partial_trailing_comma() {
        let ends_with_z = partial!(join, __, __, "z",);
        assert_eq!(ends_with_z("x", "y"), "x-y-z");
    }

    #[test]
    fn test_partial_evaluates_fixed_arguments_once() {
        let mut evaluations = 0;
        let add = |a: i32, b: i32| a + b;
        let add_five = partial!(
            add,
            {
                evaluations += 1;
                5
            },
            __
        );
        assert_eq!(add_five(1), 6);
        assert_eq!(add_five(2), 7);
        assert_eq!(evaluations, 1);
    }
}
