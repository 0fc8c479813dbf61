//! A single mutable slot that exposes absence as an empty sequence.
//!
//! `Slot<T>` holds at most one value. Reads and writes hand values back as
//! `Option<T>` (or `Result<T, SlotError>`), both of which iterate as zero or
//! one elements, so a slot composes with `flat_map` and `for` loops without a
//! separate null check.
//!
//! The iteration methods ([`Slot::iterate`], [`Slot::iterate_while`],
//! [`Slot::unfold`]) turn a slot into the state of a loop: every produced
//! value is written back, and the slot ends up `Unset` when the loop stops.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Slot;
//!
//! let haystack = "absddrgvrezfdfgvreegfdvsdfezgvfdfbdfhtgsdvve";
//! let mut cursor = Slot::new(haystack.find("df"));
//!
//! let positions: Vec<usize> = cursor
//!     .unfold(|&index| haystack[index + 1..].find("df").map(|offset| index + 1 + offset))
//!     .collect();
//!
//! assert_eq!(positions, vec![12, 24, 31, 34]);
//! assert!(cursor.is_unset());
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// The two states of a [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SlotState<T> {
    /// The slot holds no value.
    #[default]
    Unset,
    /// The slot holds a value.
    Set(T),
}

impl<T> SlotState<T> {
    /// Converts the state into the 0-or-1 element shape.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Borrows the held value, if any.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for SlotState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

/// Error returned by [`Slot::apply`] when the slot holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// The operation needs a value but the slot is unset.
    Unset,
}

impl fmt::Display for SlotError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(formatter, "slot is unset"),
        }
    }
}

impl std::error::Error for SlotError {}

/// A single mutable storage slot.
///
/// Each slot is owned by its holder; two slots never share state.
///
/// # Examples
///
/// ```rust
/// use fnkit::control::Slot;
///
/// let mut slot = Slot::with_value(5);
/// assert_eq!(slot.get(), Some(5));
///
/// assert_eq!(slot.set(7), Some(5));
/// assert_eq!(slot.get(), Some(7));
///
/// assert_eq!(slot.unset(), Some(7));
/// assert_eq!(slot.get(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot<T> {
    state: SlotState<T>,
}

impl<T> Slot<T> {
    /// Creates a slot from an optional initial value.
    #[inline]
    pub fn new(initial: Option<T>) -> Self {
        Self {
            state: initial.into(),
        }
    }

    /// Creates an unset slot.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            state: SlotState::Unset,
        }
    }

    /// Creates a slot holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self {
            state: SlotState::Set(value),
        }
    }

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> &SlotState<T> {
        &self.state
    }

    /// Returns `true` if the slot holds no value.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self.state, SlotState::Unset)
    }

    /// Borrows the current value without copying it.
    #[inline]
    pub const fn peek(&self) -> Option<&T> {
        self.state.as_option()
    }

    /// Returns a copy of the current value as a 0-or-1 element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Slot;
    ///
    /// let present = Slot::with_value(3);
    /// let absent: Slot<i32> = Slot::empty();
    ///
    /// let collected: Vec<i32> = present.get().into_iter().chain(absent.get()).collect();
    /// assert_eq!(collected, vec![3]);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek().cloned()
    }

    /// Stores `value` and returns the previous contents.
    pub fn set(&mut self, value: T) -> Option<T> {
        trace_event!(previous_unset = self.is_unset(), "slot set");
        std::mem::replace(&mut self.state, SlotState::Set(value)).into_option()
    }

    /// Empties the slot and returns the previous contents.
    pub fn unset(&mut self) -> Option<T> {
        trace_event!(previous_unset = self.is_unset(), "slot unset");
        std::mem::take(&mut self.state).into_option()
    }

    /// Replaces the current value with `function(&current)`.
    ///
    /// Returns the previous value. On an unset slot `function` is not called
    /// and [`SlotError::Unset`] is returned. `Result` iterates as 0 or 1
    /// elements, so the return value can feed a loop directly.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Unset`] if the slot holds no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Slot;
    ///
    /// let mut slot = Slot::with_value(2_u64);
    /// let squares: Vec<u64> = (0..5)
    ///     .flat_map(|_| slot.apply(|value| value * value))
    ///     .collect();
    ///
    /// assert_eq!(squares, vec![2, 4, 16, 256, 65536]);
    /// assert_eq!(slot.get(), Some(4_294_967_296));
    /// ```
    pub fn apply<F>(&mut self, function: F) -> Result<T, SlotError>
    where
        F: FnOnce(&T) -> T,
    {
        match &mut self.state {
            SlotState::Unset => Err(SlotError::Unset),
            SlotState::Set(current) => {
                let next = function(current);
                Ok(std::mem::replace(current, next))
            }
        }
    }

    /// Replaces the state with `function(current)`, where both sides may be absent.
    ///
    /// A `None` result leaves the slot unset. Returns the previous contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Slot;
    ///
    /// let mut countdown = Slot::with_value(2_u32);
    /// assert_eq!(countdown.update(|value| value.and_then(|n| n.checked_sub(1))), Some(2));
    /// assert_eq!(countdown.update(|value| value.and_then(|n| n.checked_sub(1))), Some(1));
    /// assert_eq!(countdown.update(|value| value.and_then(|n| n.checked_sub(1))), Some(0));
    /// assert!(countdown.is_unset());
    /// ```
    pub fn update<F>(&mut self, function: F) -> Option<T>
    where
        F: FnOnce(Option<&T>) -> Option<T>,
    {
        let next = SlotState::from(function(self.peek()));
        trace_event!(
            previous_unset = self.is_unset(),
            next_unset = matches!(next, SlotState::Unset),
            "slot update"
        );
        std::mem::replace(&mut self.state, next).into_option()
    }

    /// Iterates from the current value by repeatedly applying `successor`.
    ///
    /// The sequence only ends if the slot is unset, so bound it with `take`
    /// or `take_while`. See [`Slot::iterate_while`] for the exact protocol.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Slot;
    ///
    /// let mut slot = Slot::with_value(1);
    /// let powers: Vec<i32> = slot.iterate(|value| value * 2).take(5).collect();
    /// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
    /// assert_eq!(slot.get(), Some(16));
    /// ```
    pub fn iterate<S>(&mut self, mut successor: S) -> Iterate<'_, T, impl FnMut(&T) -> Option<T>>
    where
        T: Clone,
        S: FnMut(&T) -> T,
    {
        self.unfold(move |value| Some(successor(value)))
    }

    /// Iterates from the current value while `predicate` accepts the successors.
    ///
    /// The protocol is:
    ///
    /// 1. the current value (the seed) is yielded first and is never tested;
    /// 2. each later value is `successor(previous)`, computed when requested;
    /// 3. a new value is tested with `predicate` before it is yielded; the
    ///    first rejected value is neither yielded nor stored, the slot becomes
    ///    unset and the iterator ends.
    ///
    /// Every yielded value is also written to the slot. Once the iterator has
    /// ended the slot is unset, so iterating again yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Slot;
    ///
    /// let mut slot = Slot::with_value(0);
    /// let values: Vec<i32> = slot.iterate_while(|value| value + 1, |value| *value < 5).collect();
    ///
    /// assert_eq!(values, vec![0, 1, 2, 3, 4]);
    /// assert!(slot.is_unset());
    /// assert_eq!(slot.iterate_while(|value| value + 1, |value| *value < 5).count(), 0);
    /// ```
    pub fn iterate_while<S, P>(
        &mut self,
        mut successor: S,
        mut predicate: P,
    ) -> Iterate<'_, T, impl FnMut(&T) -> Option<T>>
    where
        T: Clone,
        S: FnMut(&T) -> T,
        P: FnMut(&T) -> bool,
    {
        self.unfold(move |value| Some(successor(value)).filter(|next| predicate(next)))
    }

    /// Iterates from the current value until `successor` returns `None`.
    ///
    /// Same protocol as [`Slot::iterate_while`], with the stop condition
    /// folded into the successor.
    pub fn unfold<S>(&mut self, successor: S) -> Iterate<'_, T, S>
    where
        T: Clone,
        S: FnMut(&T) -> Option<T>,
    {
        Iterate {
            slot: self,
            successor,
            seeded: false,
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(initial: Option<T>) -> Self {
        Self::new(initial)
    }
}

/// Iterator returned by the iteration methods of [`Slot`].
///
/// It borrows the slot mutably and writes each produced value back into it.
pub struct Iterate<'s, T, S> {
    slot: &'s mut Slot<T>,
    successor: S,
    seeded: bool,
}

impl<T, S> Iterator for Iterate<'_, T, S>
where
    T: Clone,
    S: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.seeded {
            self.seeded = true;
            trace_event!(unset = self.slot.is_unset(), "slot iteration seeded");
            return self.slot.get();
        }

        let next = (self.successor)(self.slot.peek()?);
        match next {
            Some(value) => {
                self.slot.state = SlotState::Set(value.clone());
                Some(value)
            }
            None => {
                trace_event!("slot iteration stopped");
                self.slot.state = SlotState::Unset;
                None
            }
        }
    }
}

impl<T, S> FusedIterator for Iterate<'_, T, S>
where
    T: Clone,
    S: FnMut(&T) -> Option<T>,
{
}

impl<T: fmt::Debug, S> fmt::Debug for Iterate<'_, T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iterate")
            .field("slot", &self.slot)
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}
