pub use crate::hook::GcEventHook;
pub use crate::publisher::PublishJob;
pub use crate::util::opaque_pointer::*;
pub use crate::util::record::{GcPhase, OriginThread, RuntimeStats};
pub use crate::vm::event::{GcEvent, GcEventSet};
pub use crate::vm::vmbinding::VMBinding;
