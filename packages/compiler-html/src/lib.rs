//! # RenoBook HTML Compiler
//!
//! Renders a [`renobook_content::SiteContent`] tree to a static HTML page:
//! nav, hero, benefit cards, featured laptops, process steps, testimonials,
//! newsletter and footer, in that order. Collections render in ascending
//! `order`; only featured laptops appear.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{render_page, RenderOptions};
