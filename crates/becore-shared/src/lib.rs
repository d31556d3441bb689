//! # becore-shared
//!
//! Data model of the BeCore site: the editable [`SiteConfig`] document with
//! its path-based editing, and the contact [`Message`] records of the admin
//! inbox. Nothing here touches storage.

pub mod constants;
pub mod defaults;
pub mod edit;
pub mod error;
pub mod merge;
pub mod message;
pub mod path;
pub mod site;
pub mod types;

pub use error::{EditError, PathError, SubmissionError};
pub use message::{Message, NewMessage};
pub use path::{Path, Segment};
pub use site::SiteConfig;
pub use types::{CtaVariant, GalleryKind, MessageId, MessageStatus};
