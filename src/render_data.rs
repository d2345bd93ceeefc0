use std::any::{type_name, Any};
use std::fmt;

/// Opaque state a component records in one commit for use in the next.
///
/// The payload type is chosen by the component. A snapshot is moved from the
/// creator that recorded it into the creator that consumes it and is never
/// shared between the two.
pub struct RenderData {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl RenderData {
    /// Wrap a component's snapshot.
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the payload type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the payload as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Take the payload out. On a type mismatch the snapshot is handed back
    /// untouched.
    pub fn downcast<T: Any>(self) -> Result<T, RenderData> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(RenderData { value, type_name }),
        }
    }
}

impl fmt::Debug for RenderData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderData")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
