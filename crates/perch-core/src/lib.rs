//! Core systems for Perch.
//!
//! This crate provides the foundations the overlay widgets are built on:
//!
//! - **Object Model**: stable [`ObjectId`] handles backed by a global registry
//! - **Signal/Slot System**: type-safe change notification through [`Signal`]
//! - **Logging**: `tracing` target names shared by every Perch crate
//!
//! # Signal/Slot Example
//!
//! ```
//! use perch_core::Signal;
//!
//! let dismissed = Signal::<()>::new();
//! let conn_id = dismissed.connect(|_| println!("popup dismissed"));
//!
//! dismissed.emit(());
//! dismissed.disconnect(conn_id);
//! ```
//!
//! # Object Example
//!
//! ```
//! use perch_core::{global_registry, Object, ObjectBase, ObjectId};
//!
//! struct Panel {
//!     base: ObjectBase,
//! }
//!
//! impl Object for Panel {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let panel = Panel { base: ObjectBase::new::<Panel>() };
//! assert!(global_registry().contains(panel.object_id()));
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{ObjectError, ObjectResult};
pub use object::{global_registry, Object, ObjectBase, ObjectId, ObjectRegistry};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
