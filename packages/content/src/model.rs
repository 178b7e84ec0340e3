//! Content tree entities.
//!
//! `SiteContent` is the aggregate the whole site renders from. Every
//! collection entry carries a stable `id` (the update key) and an explicit
//! integer `order`; display sequence is always ascending `order`, decided at
//! read time via the `sorted_*` accessors.
//!
//! Wire names are camelCase so snapshots stay compatible with the site's
//! historical JSON layout.

use crate::tokens::{ColorToken, Icon};
use serde::{Deserialize, Serialize};

/// Top navigation link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub order: i32,
}

/// Hero section copy (singleton).
///
/// The display title is not stored: it is derived from `title_prefix` and
/// `subtitle` on read, so editing either field never clobbers the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title_prefix: String,
    pub subtitle: String,
    pub description: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

impl HeroContent {
    /// Full page title, `"{prefix} {subtitle}"`
    pub fn display_title(&self) -> String {
        format!("{} {}", self.title_prefix.trim(), self.subtitle)
    }
}

/// Value-proposition card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitItem {
    pub id: String,
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub color: ColorToken,
    pub order: i32,
}

/// Catalog entry; only `featured` laptops appear on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopProduct {
    pub id: String,
    pub name: String,
    pub specs: String,
    pub price: u32,
    pub original_price: u32,
    pub rating: f32,
    pub color: ColorToken,
    pub featured: bool,
    pub order: i32,
}

/// One step of the refurbishing process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    /// Display ordinal shown inside the step badge
    pub step: u32,
    pub title: String,
    pub description: String,
    pub order: i32,
}

/// Customer quote; `rating` is the number of star glyphs rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub rating: u8,
    pub comment: String,
    pub verified: bool,
    pub color: ColorToken,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

/// Footer link column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub links: Vec<FooterLink>,
}

/// Contact details (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Newsletter block copy (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterCopy {
    pub title: String,
    pub description: String,
}

/// The whole content tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub navigation: Vec<NavigationItem>,
    pub hero: HeroContent,
    pub benefits: Vec<BenefitItem>,
    pub laptops: Vec<LaptopProduct>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub footer: Vec<FooterSection>,
    pub contact: ContactInfo,
    pub newsletter: NewsletterCopy,
}

impl SiteContent {
    pub fn sorted_navigation(&self) -> Vec<NavigationItem> {
        let mut items = self.navigation.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn sorted_benefits(&self) -> Vec<BenefitItem> {
        let mut items = self.benefits.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    /// Laptops with `featured == true`, ascending by `order`
    pub fn featured_laptops(&self) -> Vec<LaptopProduct> {
        let mut items: Vec<LaptopProduct> = self
            .laptops
            .iter()
            .filter(|laptop| laptop.featured)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn sorted_process(&self) -> Vec<ProcessStep> {
        let mut items = self.process.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn sorted_testimonials(&self) -> Vec<Testimonial> {
        let mut items = self.testimonials.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    pub fn sorted_footer(&self) -> Vec<FooterSection> {
        let mut items = self.footer.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    /// Shallow merge: top-level keys present in the patch wholly replace the
    /// corresponding keys here. Never a deep merge.
    pub fn merge(&mut self, patch: ContentPatch) {
        if let Some(navigation) = patch.navigation {
            self.navigation = navigation;
        }
        if let Some(hero) = patch.hero {
            self.hero = hero;
        }
        if let Some(benefits) = patch.benefits {
            self.benefits = benefits;
        }
        if let Some(laptops) = patch.laptops {
            self.laptops = laptops;
        }
        if let Some(process) = patch.process {
            self.process = process;
        }
        if let Some(testimonials) = patch.testimonials {
            self.testimonials = testimonials;
        }
        if let Some(footer) = patch.footer {
            self.footer = footer;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(newsletter) = patch.newsletter {
            self.newsletter = newsletter;
        }
    }
}

/// Partial content tree for shallow-merge updates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Vec<NavigationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<BenefitItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laptops: Option<Vec<LaptopProduct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<FooterSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<NewsletterCopy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_navigation_ignores_storage_order() {
        let mut content = SiteContent::default();
        content.navigation = vec![
            NavigationItem {
                id: "nav-b".to_string(),
                label: "Second".to_string(),
                href: "#b".to_string(),
                order: 7,
            },
            NavigationItem {
                id: "nav-a".to_string(),
                label: "First".to_string(),
                href: "#a".to_string(),
                order: 3,
            },
        ];

        let sorted = content.sorted_navigation();
        assert_eq!(sorted[0].id, "nav-a");
        assert_eq!(sorted[1].id, "nav-b");
    }

    #[test]
    fn test_featured_laptops_filters_and_sorts() {
        let mut content = SiteContent::default();
        assert_eq!(content.featured_laptops().len(), 3);

        content.laptops[1].featured = false;
        let featured = content.featured_laptops();
        assert_eq!(featured.len(), 2);
        assert!(featured.windows(2).all(|pair| pair[0].order <= pair[1].order));
    }

    #[test]
    fn test_hero_display_title_is_derived() {
        let mut content = SiteContent::default();
        assert_eq!(content.hero.display_title(), "Premium Refurbished Laptops");

        content.hero.subtitle = "Notebooks".to_string();
        assert_eq!(content.hero.display_title(), "Premium Refurbished Notebooks");
        // Prefix untouched by the subtitle edit
        assert_eq!(content.hero.title_prefix, "Premium Refurbished");
    }

    #[test]
    fn test_merge_replaces_whole_top_level_keys() {
        let mut content = SiteContent::default();
        let patch = ContentPatch {
            navigation: Some(vec![]),
            ..ContentPatch::default()
        };

        let before = content.clone();
        content.merge(patch);

        assert!(content.navigation.is_empty());
        // Everything else untouched
        assert_eq!(content.hero, before.hero);
        assert_eq!(content.laptops, before.laptops);
        assert_eq!(content.footer, before.footer);
    }

    #[test]
    fn test_serde_round_trip() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let back: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, back);
    }
}
