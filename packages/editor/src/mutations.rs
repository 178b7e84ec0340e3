//! # Content Mutations
//!
//! Field-level edit operations on the content tree.
//!
//! ## Mutation Semantics
//!
//! - Every mutation targets one field of one entity, addressed by the
//!   entity's stable `id`
//! - Applying replaces the **whole collection** with a new `Vec` in which
//!   only the matched entry's field differs
//! - An id with no matching entry is a silent no-op: `apply` reports
//!   `false` but never errors
//! - Values arrive as text (they come from an editable field); numeric
//!   fields coerce with a zero fallback, booleans treat anything but
//!   `"true"` as false, icon/color names go through the closed-enum parse

use renobook_content::{
    BenefitItem, ColorToken, FooterSection, Icon, LaptopProduct, NavigationItem, ProcessStep,
    SiteContent, Testimonial,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroField {
    TitlePrefix,
    Subtitle,
    Description,
    PrimaryButtonText,
    SecondaryButtonText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationField {
    Label,
    Href,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitField {
    Icon,
    Title,
    Description,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaptopField {
    Name,
    Specs,
    Price,
    OriginalPrice,
    Rating,
    Color,
    Featured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessField {
    Step,
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialField {
    Name,
    Initials,
    Rating,
    Comment,
    Verified,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FooterLinkField {
    Label,
    Href,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactField {
    Phone,
    Email,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsletterField {
    Title,
    Description,
}

/// One committed edit, as produced by an editable field losing focus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    SetHeroField {
        field: HeroField,
        value: String,
    },

    SetNavigationField {
        id: String,
        field: NavigationField,
        value: String,
    },

    SetBenefitField {
        id: String,
        field: BenefitField,
        value: String,
    },

    SetLaptopField {
        id: String,
        field: LaptopField,
        value: String,
    },

    SetProcessField {
        id: String,
        field: ProcessField,
        value: String,
    },

    SetTestimonialField {
        id: String,
        field: TestimonialField,
        value: String,
    },

    SetFooterTitle {
        id: String,
        value: String,
    },

    SetFooterLink {
        section_id: String,
        link_id: String,
        field: FooterLinkField,
        value: String,
    },

    SetContactField {
        field: ContactField,
        value: String,
    },

    SetNewsletterField {
        field: NewsletterField,
        value: String,
    },
}

impl Mutation {
    /// Apply to the content tree. Returns whether anything changed; an
    /// unmatched id leaves the tree untouched and returns `false`.
    pub fn apply(&self, content: &mut SiteContent) -> bool {
        match self {
            Mutation::SetHeroField { field, value } => {
                let hero = &mut content.hero;
                match field {
                    HeroField::TitlePrefix => hero.title_prefix = value.clone(),
                    HeroField::Subtitle => hero.subtitle = value.clone(),
                    HeroField::Description => hero.description = value.clone(),
                    HeroField::PrimaryButtonText => hero.primary_button_text = value.clone(),
                    HeroField::SecondaryButtonText => hero.secondary_button_text = value.clone(),
                }
                true
            }

            Mutation::SetNavigationField { id, field, value } => {
                let (items, changed) = update_navigation(&content.navigation, id, *field, value);
                content.navigation = items;
                changed
            }

            Mutation::SetBenefitField { id, field, value } => {
                let (items, changed) = update_benefits(&content.benefits, id, *field, value);
                content.benefits = items;
                changed
            }

            Mutation::SetLaptopField { id, field, value } => {
                let (items, changed) = update_laptops(&content.laptops, id, *field, value);
                content.laptops = items;
                changed
            }

            Mutation::SetProcessField { id, field, value } => {
                let (items, changed) = update_process(&content.process, id, *field, value);
                content.process = items;
                changed
            }

            Mutation::SetTestimonialField { id, field, value } => {
                let (items, changed) = update_testimonials(&content.testimonials, id, *field, value);
                content.testimonials = items;
                changed
            }

            Mutation::SetFooterTitle { id, value } => {
                let mut changed = false;
                content.footer = content
                    .footer
                    .iter()
                    .map(|section| {
                        if section.id == *id {
                            changed = true;
                            FooterSection {
                                title: value.clone(),
                                ..section.clone()
                            }
                        } else {
                            section.clone()
                        }
                    })
                    .collect();
                changed
            }

            Mutation::SetFooterLink {
                section_id,
                link_id,
                field,
                value,
            } => {
                let mut changed = false;
                content.footer = content
                    .footer
                    .iter()
                    .map(|section| {
                        if section.id != *section_id {
                            return section.clone();
                        }
                        let mut section = section.clone();
                        for link in &mut section.links {
                            if link.id == *link_id {
                                changed = true;
                                match field {
                                    FooterLinkField::Label => link.label = value.clone(),
                                    FooterLinkField::Href => link.href = value.clone(),
                                }
                            }
                        }
                        section
                    })
                    .collect();
                changed
            }

            Mutation::SetContactField { field, value } => {
                match field {
                    ContactField::Phone => content.contact.phone = value.clone(),
                    ContactField::Email => content.contact.email = value.clone(),
                    ContactField::Address => content.contact.address = value.clone(),
                }
                true
            }

            Mutation::SetNewsletterField { field, value } => {
                match field {
                    NewsletterField::Title => content.newsletter.title = value.clone(),
                    NewsletterField::Description => content.newsletter.description = value.clone(),
                }
                true
            }
        }
    }
}

fn update_navigation(
    items: &[NavigationItem],
    id: &str,
    field: NavigationField,
    value: &str,
) -> (Vec<NavigationItem>, bool) {
    let mut changed = false;
    let items = items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            changed = true;
            let mut item = item.clone();
            match field {
                NavigationField::Label => item.label = value.to_string(),
                NavigationField::Href => item.href = value.to_string(),
            }
            item
        })
        .collect();
    (items, changed)
}

fn update_benefits(
    items: &[BenefitItem],
    id: &str,
    field: BenefitField,
    value: &str,
) -> (Vec<BenefitItem>, bool) {
    let mut changed = false;
    let items = items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            changed = true;
            let mut item = item.clone();
            match field {
                BenefitField::Icon => item.icon = Icon::parse(value),
                BenefitField::Title => item.title = value.to_string(),
                BenefitField::Description => item.description = value.to_string(),
                BenefitField::Color => item.color = ColorToken::parse(value),
            }
            item
        })
        .collect();
    (items, changed)
}

fn update_laptops(
    items: &[LaptopProduct],
    id: &str,
    field: LaptopField,
    value: &str,
) -> (Vec<LaptopProduct>, bool) {
    let mut changed = false;
    let items = items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            changed = true;
            let mut item = item.clone();
            match field {
                LaptopField::Name => item.name = value.to_string(),
                LaptopField::Specs => item.specs = value.to_string(),
                LaptopField::Price => item.price = coerce_u32(value),
                LaptopField::OriginalPrice => item.original_price = coerce_u32(value),
                LaptopField::Rating => item.rating = coerce_f32(value),
                LaptopField::Color => item.color = ColorToken::parse(value),
                LaptopField::Featured => item.featured = coerce_bool(value),
            }
            item
        })
        .collect();
    (items, changed)
}

fn update_process(
    items: &[ProcessStep],
    id: &str,
    field: ProcessField,
    value: &str,
) -> (Vec<ProcessStep>, bool) {
    let mut changed = false;
    let items = items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            changed = true;
            let mut item = item.clone();
            match field {
                ProcessField::Step => item.step = coerce_u32(value),
                ProcessField::Title => item.title = value.to_string(),
                ProcessField::Description => item.description = value.to_string(),
            }
            item
        })
        .collect();
    (items, changed)
}

fn update_testimonials(
    items: &[Testimonial],
    id: &str,
    field: TestimonialField,
    value: &str,
) -> (Vec<Testimonial>, bool) {
    let mut changed = false;
    let items = items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            changed = true;
            let mut item = item.clone();
            match field {
                TestimonialField::Name => item.name = value.to_string(),
                TestimonialField::Initials => item.initials = value.to_string(),
                TestimonialField::Rating => item.rating = coerce_u8(value),
                TestimonialField::Comment => item.comment = value.to_string(),
                TestimonialField::Verified => item.verified = coerce_bool(value),
                TestimonialField::Color => item.color = ColorToken::parse(value),
            }
            item
        })
        .collect();
    (items, changed)
}

// Text-to-number coercion: edits arrive as text, failure falls back to zero

fn coerce_u32(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

fn coerce_u8(value: &str) -> u8 {
    value.trim().parse().unwrap_or(0)
}

fn coerce_f32(value: &str) -> f32 {
    value.trim().parse().unwrap_or(0.0)
}

fn coerce_bool(value: &str) -> bool {
    value.trim() == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::SetLaptopField {
            id: "laptop-1".to_string(),
            field: LaptopField::Price,
            value: "829".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_non_numeric_price_coerces_to_zero() {
        let mut content = SiteContent::default();
        let mutation = Mutation::SetLaptopField {
            id: "laptop-1".to_string(),
            field: LaptopField::Price,
            value: "not a number".to_string(),
        };

        assert!(mutation.apply(&mut content));
        assert_eq!(content.laptops[0].price, 0);
    }

    #[test]
    fn test_featured_coercion() {
        let mut content = SiteContent::default();
        let mutation = Mutation::SetLaptopField {
            id: "laptop-2".to_string(),
            field: LaptopField::Featured,
            value: "false".to_string(),
        };

        mutation.apply(&mut content);
        assert!(!content.laptops[1].featured);

        // Anything that isn't "true" coerces to false
        let mutation = Mutation::SetLaptopField {
            id: "laptop-2".to_string(),
            field: LaptopField::Featured,
            value: "yes".to_string(),
        };
        mutation.apply(&mut content);
        assert!(!content.laptops[1].featured);
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let mut content = SiteContent::default();
        let before = content.clone();

        let mutation = Mutation::SetBenefitField {
            id: "benefit-99".to_string(),
            field: BenefitField::Title,
            value: "Ghost".to_string(),
        };

        assert!(!mutation.apply(&mut content));
        assert_eq!(content, before);
    }

    #[test]
    fn test_footer_link_update_targets_one_link() {
        let mut content = SiteContent::default();
        let mutation = Mutation::SetFooterLink {
            section_id: "footer-1".to_string(),
            link_id: "shop-2".to_string(),
            field: FooterLinkField::Label,
            value: "Linux Laptops".to_string(),
        };

        assert!(mutation.apply(&mut content));
        assert_eq!(content.footer[0].links[1].label, "Linux Laptops");
        assert_eq!(content.footer[0].links[0].label, "MacBooks");
        assert_eq!(content.footer[1].links.len(), 4);
    }

    #[test]
    fn test_icon_edit_with_unknown_name_falls_back() {
        let mut content = SiteContent::default();
        let mutation = Mutation::SetBenefitField {
            id: "benefit-1".to_string(),
            field: BenefitField::Icon,
            value: "Typewriter".to_string(),
        };

        mutation.apply(&mut content);
        assert_eq!(content.benefits[0].icon, Icon::Laptop);
    }
}
