//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, document attributes) behind small traits so theme logic can be
//! tested natively.

pub mod color;
pub mod document_theme;
pub mod media_query;
pub mod storage;
