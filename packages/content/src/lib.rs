//! # RenoBook Content
//!
//! Data model for the RenoBook marketing site.
//!
//! The whole page is driven by a single [`SiteContent`] tree: navigation
//! links, hero copy, benefit cards, the laptop catalog, process steps,
//! testimonials, footer sections, contact info and newsletter copy.
//!
//! ## Core Principles
//!
//! 1. **One tree, one source of truth**: every rendering surface reads from
//!    `SiteContent`; nothing caches derived copies
//! 2. **Explicit ordering**: collections carry an `order` field and are
//!    sorted on read, never trusted in storage order
//! 3. **Closed symbol sets**: icons and color tokens are enums with a
//!    defined fallback, so an unknown name can never leak downstream

mod defaults;
mod model;
mod tokens;

pub use model::{
    BenefitItem, ContactInfo, ContentPatch, FooterLink, FooterSection, HeroContent,
    LaptopProduct, NavigationItem, NewsletterCopy, ProcessStep, SiteContent, Testimonial,
};
pub use tokens::{ColorToken, Icon};
