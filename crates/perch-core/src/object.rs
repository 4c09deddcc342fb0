//! Object identity for Perch.
//!
//! Every addressable element (popups, canvases, content objects) owns an
//! [`ObjectBase`], which registers it with the global [`ObjectRegistry`] and
//! hands out a stable [`ObjectId`]. Ids are what shared structures such as the
//! canvas overlay stack store, so they never need to borrow the objects
//! themselves.
//!
//! The id is released when the `ObjectBase` is dropped.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::error::{ObjectError, ObjectResult};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are cheap `Copy` handles. They become invalid when the
    /// owning [`ObjectBase`] is dropped, and slotmap versioning guarantees a
    /// stale id is never confused with a newer object.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Base trait for all objects that carry an identity.
pub trait Object {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Registry bookkeeping for a single object.
#[derive(Debug, Clone)]
struct ObjectData {
    type_name: &'static str,
    name: String,
}

/// Registry of live objects.
///
/// Access goes through [`global_registry()`]; all methods take `&self` and
/// synchronize internally.
pub struct ObjectRegistry {
    objects: RwLock<SlotMap<ObjectId, ObjectData>>,
}

impl ObjectRegistry {
    fn new() -> Self {
        Self {
            objects: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Register a new object of type `T`, returning its id.
    pub fn register<T: 'static>(&self) -> ObjectId {
        let type_name = std::any::type_name::<T>();
        let id = self.objects.write().insert(ObjectData {
            type_name,
            name: String::new(),
        });
        tracing::trace!(target: targets::OBJECT, ?id, type_name, "registered object");
        id
    }

    /// Remove an object from the registry.
    pub fn unregister(&self, id: ObjectId) -> ObjectResult<()> {
        self.objects
            .write()
            .remove(id)
            .map(|data| {
                tracing::trace!(target: targets::OBJECT, ?id, type_name = data.type_name, "unregistered object");
            })
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Check if an object is alive.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.read().contains_key(id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Get the type name an object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get an object's name (empty if never set).
    pub fn name(&self, id: ObjectId) -> ObjectResult<String> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.name.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set an object's name.
    pub fn set_name(&self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        let mut objects = self.objects.write();
        let data = objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.name = name.into();
        Ok(())
    }
}

impl fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("len", &self.len())
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceLock<ObjectRegistry> = OnceLock::new();

/// Get the global object registry, creating it on first use.
pub fn global_registry() -> &'static ObjectRegistry {
    GLOBAL_REGISTRY.get_or_init(ObjectRegistry::new)
}

/// Owned registration of an object.
///
/// Embed this in a type and forward [`Object::object_id`] to [`ObjectBase::id`].
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Register a new object of type `T`.
    pub fn new<T: 'static>() -> Self {
        Self {
            id: global_registry().register::<T>(),
        }
    }

    /// Get the object id.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name.
    pub fn name(&self) -> String {
        global_registry().name(self.id).unwrap_or_default()
    }

    /// Set the object's name.
    pub fn set_name(&self, name: impl Into<String>) {
        let _ = global_registry().set_name(self.id, name);
    }

    /// Get the registered type name.
    pub fn type_name(&self) -> &'static str {
        global_registry().type_name(self.id).unwrap_or("<destroyed>")
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        let _ = global_registry().unregister(self.id);
    }
}

impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBase").field("id", &self.id).finish()
    }
}

static_assertions::assert_impl_all!(ObjectBase: Send, Sync);
