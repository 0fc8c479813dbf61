//! The `curry!` macro.
//!
//! The function is shared between the nested closures through an
//! [`Rc`](std::rc::Rc), and arguments received at outer levels are cloned
//! into each inner call. Every intermediate closure therefore implements
//! [`Fn`] and can be reused for several partial applications.

/// Converts a function of two or more arguments into nested single-argument closures.
///
/// `curry!(f => a, b, c)` is `|a| |b| |c| f(a, b, c)`. The names after `=>`
/// only name the parameters and fix the arity. All arguments except the last
/// must implement [`Clone`].
///
/// # Laws
///
/// - **Equivalence**: `curry!(f => a, b)(x)(y) == f(x, y)`
///
/// # Examples
///
/// ```
/// use fnkit::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
///
/// let curried = curry!(volume => width, height, depth);
/// let two_wide = curried(2);
/// let two_by_three = two_wide(3);
///
/// assert_eq!(two_by_three(4), 24);
/// assert_eq!(two_by_three(5), 30);
/// assert_eq!(two_wide(1)(1), 2);
/// ```
///
/// ## Building a multiplication table
///
/// ```
/// use fnkit::curry;
///
/// let times = curry!(|left: i32, right: i32| left * right => left, right);
/// let table: Vec<Vec<i32>> = (1..4)
///     .map(|row| (1..4).map(times(row)).collect())
///     .collect();
///
/// assert_eq!(table, vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 6, 9]]);
/// ```
#[macro_export]
macro_rules! curry {
    (@nest $function:ident; [$($bound:ident)*]; $parameter:ident;) => {
        move |$parameter| $function($(::core::clone::Clone::clone(&$bound),)* $parameter)
    };
    (@nest $function:ident; [$($bound:ident)*]; $parameter:ident; $next:ident $(, $rest:ident)*) => {
        move |$parameter| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::curry!(@nest $function; [$($bound)* $parameter]; $next; $($rest),*)
        }
    };
    ($function:expr => $first:ident, $($rest:ident),+ $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::curry!(@nest function; []; $first; $($rest),+)
    }};
}

#[cfg(test)]
mod tests {
    fn concat(first: String, second: &str) -> String {
        first + second
    }

    #[test]
    fn test_curry_with_owned_argument() {
        let curried = curry!(concat => first, second);
        let hello = curried(String::from("Hello, "));
        assert_eq!(hello("world"), "Hello, world");
        assert_eq!(hello("Rust"), "Hello, Rust");
    }

    #[test]
    fn test_curry_four_arguments() {
        let sum = curry!(|a: i32, b: i32, c: i32, d: i32| a + b + c + d => a, b, c, d);
        assert_eq!(sum(1)(2)(3)(4), 10);
    }
}
