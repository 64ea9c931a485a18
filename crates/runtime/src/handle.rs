//! Handles to remote JavaScript values.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::remote_object::RemoteObject;

/// Identifier of the execution context a remote value belongs to.
pub type ExecutionContextId = i64;

/// Handle to a value in a remote JavaScript runtime.
///
/// Handles are shared behind `Arc` between whoever received them and the
/// collaborator responsible for releasing remote objects. Holding a handle
/// never keeps the remote object alive; `dispose` only marks it released.
#[derive(Debug)]
pub struct JsHandle {
    context_id: ExecutionContextId,
    remote_object: RemoteObject,
    disposed: AtomicBool,
}

impl JsHandle {
    /// Create a handle for a remote object in the given context.
    pub fn new(context_id: ExecutionContextId, remote_object: RemoteObject) -> Self {
        Self {
            context_id,
            remote_object,
            disposed: AtomicBool::new(false),
        }
    }

    pub fn execution_context_id(&self) -> ExecutionContextId {
        self.context_id
    }

    pub fn remote_object(&self) -> &RemoteObject {
        &self.remote_object
    }

    pub fn object_id(&self) -> Option<&str> {
        self.remote_object.object_id.as_deref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Mark the handle disposed.
    ///
    /// Returns the object id the caller must release on the remote side.
    /// Only the first call on a by-reference handle returns `Some`.
    pub fn dispose(&self) -> Option<String> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return None;
        }
        let object_id = self.remote_object.object_id.clone();
        trace!(?object_id, "disposed handle");
        object_id
    }
}

impl fmt::Display for JsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.remote_object.is_reference() {
            let kind = self
                .remote_object
                .subtype
                .as_deref()
                .unwrap_or_else(|| self.remote_object.object_type.as_str());
            return write!(f, "JSHandle@{}", kind);
        }
        match self.remote_object.primitive_value() {
            Ok(value) => write!(f, "JSHandle:{}", value),
            Err(_) => write!(f, "JSHandle@{}", self.remote_object.object_type.as_str()),
        }
    }
}
