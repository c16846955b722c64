pub mod slot;
pub mod layout;

pub use slot::{Slot, SlotId};
pub use layout::TreeSkeleton;
