//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `ui`) so individual components can
//! depend on small focused models. Each module is a plain data type; the
//! root `App` component wraps them in `RwSignal`s and provides them via
//! context.

pub mod theme;
pub mod ui;
