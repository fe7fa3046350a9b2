//! Layout management — coordinate mapping, the in-memory layout model, and
//! the transactional edit session.
//!
//! The `geometry` module converts between logical grid cells and pixel
//! geometry. The `model` module holds the active tab's loaded components and
//! enforces grid bounds on moves and resizes. The `session` module owns the
//! snapshot/working-copy lifecycle and the changed-set, and the `diff`
//! module reduces a committed session to the minimal patch document. The
//! `selection` and `addressing` modules cover component selection and
//! target resolution.

pub mod addressing;
pub mod diff;
pub mod geometry;
pub mod model;
pub mod selection;
pub mod session;
