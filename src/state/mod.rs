//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `ui`) as plain, host-testable
//! models. Components wrap them in `RwSignal`s provided via context; nothing
//! in here touches the network or the DOM.

pub mod nav;
pub mod session;
pub mod ui;
