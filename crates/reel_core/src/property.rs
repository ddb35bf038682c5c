//! Animatable properties
//!
//! An [`AnimatableProperty`] is an observed value cell. Animations write to it
//! on every tick and the owner's callback sees each write.
//!
//! Handles are single-threaded (`Rc`), matching the synchronous tick model:
//! cloning a handle shares the same cell, so the application can keep one
//! handle while any number of animations hold others.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::interpolate::Interpolate;

type ChangeCallback<T> = Box<dyn Fn(&T)>;

struct PropertyCell<T> {
    value: RefCell<T>,
    on_change: ChangeCallback<T>,
}

/// Shared handle to an observed, interpolatable value
pub struct AnimatableProperty<T: Interpolate> {
    cell: Rc<PropertyCell<T>>,
}

impl<T: Interpolate> AnimatableProperty<T> {
    /// Create a property holding `value` that reports every write to `on_change`
    pub fn new(value: T, on_change: impl Fn(&T) + 'static) -> Self {
        Self {
            cell: Rc::new(PropertyCell {
                value: RefCell::new(value),
                on_change: Box::new(on_change),
            }),
        }
    }

    /// Create a property nobody observes
    pub fn detached(value: T) -> Self {
        Self::new(value, |_| {})
    }

    /// Current value
    pub fn value(&self) -> T {
        self.cell.value.borrow().clone()
    }

    /// Write a new value and notify the observer.
    ///
    /// The callback fires on every write, including writes of an equal value.
    /// It runs after the cell is updated, so it may read the property; writing
    /// the same property from inside the callback recurses without a guard.
    pub fn set(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        let current = self.value();
        (self.cell.on_change)(&current);
    }

    /// Whether two handles point at the same cell
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Interpolate> Clone for AnimatableProperty<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Interpolate + fmt::Debug> fmt::Debug for AnimatableProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatableProperty")
            .field("value", &*self.cell.value.borrow())
            .finish()
    }
}
