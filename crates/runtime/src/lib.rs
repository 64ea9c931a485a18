//! Client-side view of values living in a remote JavaScript runtime.
//!
//! This crate provides:
//! - `RemoteObject`, the protocol description of a remote value
//! - `PrimitiveValue`, the local form of a by-value remote object
//! - `JsHandle`, a shared handle to a remote value

pub mod handle;
pub mod remote_object;

pub use handle::{ExecutionContextId, JsHandle};
pub use remote_object::{PrimitiveValue, RemoteObject, RemoteObjectType};
