//! Shared context for context-bearing machines.
//!
//! A machine owns exactly one context value for its lifetime. Handlers reach
//! it through a [`ContextHandle`], which offers both a get/set accessor pair
//! (with shallow-merge `set`) and direct mutable access.

use serde_json::{Map, Value};

/// Data a machine can carry between transitions.
///
/// `merge` implements the shallow merge performed by [`ContextHandle::set`]:
/// every field present in the patch replaces the field of the same name,
/// fields absent from the patch are left untouched.
///
/// # Example
///
/// ```rust
/// use machina::core::Context;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Cart {
///     items: u32,
///     coupon: Option<String>,
/// }
///
/// #[derive(Default)]
/// struct CartPatch {
///     items: Option<u32>,
///     coupon: Option<Option<String>>,
/// }
///
/// impl Context for Cart {
///     type Patch = CartPatch;
///
///     fn merge(&mut self, patch: CartPatch) {
///         if let Some(items) = patch.items {
///             self.items = items;
///         }
///         if let Some(coupon) = patch.coupon {
///             self.coupon = coupon;
///         }
///     }
/// }
///
/// let mut cart = Cart::default();
/// cart.merge(CartPatch { items: Some(2), ..Default::default() });
/// assert_eq!(cart.items, 2);
/// assert_eq!(cart.coupon, None);
/// ```
pub trait Context: Clone {
    /// Partial update accepted by `merge`.
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

/// Memoryless machines carry the unit context.
impl Context for () {
    type Patch = ();

    fn merge(&mut self, _patch: ()) {}
}

/// Arbitrary named fields.
impl Context for Map<String, Value> {
    type Patch = Map<String, Value>;

    fn merge(&mut self, patch: Map<String, Value>) {
        for (field, value) in patch {
            self.insert(field, value);
        }
    }
}

/// Handle through which a transition handler reaches the machine's context.
///
/// The handle borrows the machine's own context cell, so every mutation is
/// immediately visible to later transitions. There is no per-call copy and no
/// rollback.
pub struct ContextHandle<'a, C: Context> {
    data: &'a mut C,
}

impl<'a, C: Context> ContextHandle<'a, C> {
    pub(crate) fn new(data: &'a mut C) -> Self {
        Self { data }
    }

    /// Read-only view of the current context.
    pub fn get(&self) -> &C {
        &*self.data
    }

    /// Shallow-merge `patch` into the context.
    pub fn set(&mut self, patch: C::Patch) {
        self.data.merge(patch);
    }

    /// Direct mutable access to the context fields.
    pub fn get_mut(&mut self) -> &mut C {
        &mut *self.data
    }

    /// Replace the whole context.
    pub fn replace(&mut self, context: C) -> C {
        std::mem::replace(&mut *self.data, context)
    }
}

impl ContextHandle<'_, Map<String, Value>> {
    /// Read a single field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Set a single field, leaving all others untouched.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(name.into(), value.into());
    }
}
