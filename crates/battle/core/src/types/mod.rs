//! Value types shared by the ledger and the rotation.
mod category;
mod common;
mod element;
mod policy;
mod timing;

pub use category::{BuffFlags, BuffTypes};
pub use common::{BuffId, BuffKey, Turns, UnitId};
pub use element::Element;
pub use policy::CopyHandleType;
pub use timing::EffectTiming;
