//! # RenoBook Editor
//!
//! In-page content editing engine for the RenoBook site.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content: SiteContent tree + defaults        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: store + mutations + edit session    │
//! │  - Load/persist content snapshots           │
//! │  - Apply field mutations (id-keyed)         │
//! │  - Editable field draft/commit/cancel       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: SiteContent → static page    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Store is source of truth**: editable fields hold drafts, the store
//!    holds the committed tree
//! 2. **One write per completed edit**: persistence happens on commit, never
//!    per keystroke
//! 3. **Degrade, never crash**: a broken snapshot is logged and ignored, an
//!    unknown id is a no-op
//!
//! ## Usage
//!
//! ```rust,ignore
//! use renobook_editor::{ContentStore, FileStorage, Mutation, HeroField};
//!
//! let mut store = ContentStore::load(FileStorage::new(".renobook"));
//!
//! store.apply(&Mutation::SetHeroField {
//!     field: HeroField::Subtitle,
//!     value: "Notebooks".to_string(),
//! })?;
//!
//! store.reset()?;
//! ```

mod editable;
mod errors;
mod mutations;
mod session;
mod storage;
mod store;

pub use editable::{EditableField, FieldState};
pub use errors::StoreError;
pub use mutations::{
    BenefitField, ContactField, FooterLinkField, HeroField, LaptopField, Mutation,
    NavigationField, NewsletterField, ProcessField, TestimonialField,
};
pub use session::{EditSession, NewsletterSignup};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ContentStore, CONTENT_KEY, SCHEMA_VERSION};

// Re-export the tree for convenience
pub use renobook_content::SiteContent;
