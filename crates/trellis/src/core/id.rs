use std::{fmt, marker::PhantomData};

use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle for a widget node stored in the [`Core`](crate::Core) arena.
    pub struct NodeId;
}

/// A node handle that also records the widget type stored at the node. Typed
/// handles are what widget factories return, so callers can reach the concrete
/// widget through [`Core::with_widget`](crate::Core::with_widget) without
/// naming the type again.
pub struct TypedId<T> {
    /// Untyped node identifier.
    id: NodeId,
    /// Marker for the widget type.
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedId<T> {
    /// Wrap an untyped node identifier. The type is not checked until the
    /// widget is accessed.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Return the untyped node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<T> fmt::Debug for TypedId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedId<{}>({:?})", std::any::type_name::<T>(), self.id)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> From<TypedId<T>> for NodeId {
    fn from(value: TypedId<T>) -> Self {
        value.id
    }
}

impl<T> From<&TypedId<T>> for NodeId {
    fn from(value: &TypedId<T>) -> Self {
        value.id
    }
}
