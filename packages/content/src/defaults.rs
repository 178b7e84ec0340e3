//! Built-in default content.
//!
//! This is the tree the site ships with and the tree `reset` restores.

use crate::model::*;
use crate::tokens::{ColorToken, Icon};

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent {
            navigation: vec![
                NavigationItem {
                    id: "nav-1".to_string(),
                    label: "Laptops".to_string(),
                    href: "#laptops".to_string(),
                    order: 1,
                },
                NavigationItem {
                    id: "nav-2".to_string(),
                    label: "About".to_string(),
                    href: "#about".to_string(),
                    order: 2,
                },
                NavigationItem {
                    id: "nav-3".to_string(),
                    label: "Contact".to_string(),
                    href: "#contact".to_string(),
                    order: 3,
                },
            ],

            hero: HeroContent {
                title_prefix: "Premium Refurbished".to_string(),
                subtitle: "Laptops".to_string(),
                description: "Discover exceptional quality, thoroughly tested laptops at \
                              unbeatable prices. Each device comes with our comprehensive \
                              warranty and commitment to sustainability."
                    .to_string(),
                primary_button_text: "Browse Laptops".to_string(),
                secondary_button_text: "Learn More".to_string(),
            },

            benefits: vec![
                BenefitItem {
                    id: "benefit-1".to_string(),
                    icon: Icon::DollarSign,
                    title: "Save Up to 70%".to_string(),
                    description: "Get premium laptops at a fraction of the original price \
                                  without compromising on quality or performance."
                        .to_string(),
                    color: ColorToken::Emerald,
                    order: 1,
                },
                BenefitItem {
                    id: "benefit-2".to_string(),
                    icon: Icon::Leaf,
                    title: "Eco-Friendly".to_string(),
                    description: "Reduce electronic waste and carbon footprint by giving \
                                  quality devices a second life."
                        .to_string(),
                    color: ColorToken::Green,
                    order: 2,
                },
                BenefitItem {
                    id: "benefit-3".to_string(),
                    icon: Icon::Shield,
                    title: "Quality Assured".to_string(),
                    description: "Every laptop undergoes rigorous testing and comes with a \
                                  comprehensive warranty for peace of mind."
                        .to_string(),
                    color: ColorToken::Blue,
                    order: 3,
                },
            ],

            laptops: vec![
                LaptopProduct {
                    id: "laptop-1".to_string(),
                    name: "MacBook Pro 13\"".to_string(),
                    specs: "Apple M1 • 8GB RAM • 256GB SSD".to_string(),
                    price: 899,
                    original_price: 1299,
                    rating: 4.8,
                    color: ColorToken::Gray,
                    featured: true,
                    order: 1,
                },
                LaptopProduct {
                    id: "laptop-2".to_string(),
                    name: "Dell XPS 13".to_string(),
                    specs: "Intel i7 • 16GB RAM • 512GB SSD".to_string(),
                    price: 749,
                    original_price: 1199,
                    rating: 4.7,
                    color: ColorToken::Blue,
                    featured: true,
                    order: 2,
                },
                LaptopProduct {
                    id: "laptop-3".to_string(),
                    name: "ThinkPad X1 Carbon".to_string(),
                    specs: "Intel i5 • 8GB RAM • 256GB SSD".to_string(),
                    price: 599,
                    original_price: 999,
                    rating: 4.9,
                    color: ColorToken::Purple,
                    featured: true,
                    order: 3,
                },
            ],

            process: vec![
                ProcessStep {
                    id: "process-1".to_string(),
                    step: 1,
                    title: "Inspection".to_string(),
                    description: "Thorough hardware and software testing".to_string(),
                    order: 1,
                },
                ProcessStep {
                    id: "process-2".to_string(),
                    step: 2,
                    title: "Cleaning".to_string(),
                    description: "Professional deep cleaning and sanitization".to_string(),
                    order: 2,
                },
                ProcessStep {
                    id: "process-3".to_string(),
                    step: 3,
                    title: "Refurbishing".to_string(),
                    description: "Component replacement and upgrades".to_string(),
                    order: 3,
                },
                ProcessStep {
                    id: "process-4".to_string(),
                    step: 4,
                    title: "Certification".to_string(),
                    description: "Final quality check and warranty activation".to_string(),
                    order: 4,
                },
            ],

            testimonials: vec![
                Testimonial {
                    id: "testimonial-1".to_string(),
                    name: "Sarah Johnson".to_string(),
                    initials: "SJ".to_string(),
                    rating: 5,
                    comment: "Amazing quality and incredible value. My refurbished MacBook \
                              works like new and I saved over $500!"
                        .to_string(),
                    verified: true,
                    color: ColorToken::Blue,
                    order: 1,
                },
                Testimonial {
                    id: "testimonial-2".to_string(),
                    name: "Mike Chen".to_string(),
                    initials: "MC".to_string(),
                    rating: 5,
                    comment: "Excellent service and fast shipping. The laptop arrived in \
                              perfect condition with all accessories."
                        .to_string(),
                    verified: true,
                    color: ColorToken::Green,
                    order: 2,
                },
                Testimonial {
                    id: "testimonial-3".to_string(),
                    name: "Emily Rodriguez".to_string(),
                    initials: "ER".to_string(),
                    rating: 5,
                    comment: "Great experience from start to finish. The warranty gives me \
                              peace of mind about my purchase."
                        .to_string(),
                    verified: true,
                    color: ColorToken::Purple,
                    order: 3,
                },
            ],

            footer: vec![
                FooterSection {
                    id: "footer-1".to_string(),
                    title: "Shop".to_string(),
                    order: 1,
                    links: vec![
                        FooterLink {
                            id: "shop-1".to_string(),
                            label: "MacBooks".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "shop-2".to_string(),
                            label: "Windows Laptops".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "shop-3".to_string(),
                            label: "Gaming Laptops".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "shop-4".to_string(),
                            label: "Business Laptops".to_string(),
                            href: "#".to_string(),
                        },
                    ],
                },
                FooterSection {
                    id: "footer-2".to_string(),
                    title: "Support".to_string(),
                    order: 2,
                    links: vec![
                        FooterLink {
                            id: "support-1".to_string(),
                            label: "Warranty".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "support-2".to_string(),
                            label: "Returns".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "support-3".to_string(),
                            label: "FAQ".to_string(),
                            href: "#".to_string(),
                        },
                        FooterLink {
                            id: "support-4".to_string(),
                            label: "Contact Us".to_string(),
                            href: "#".to_string(),
                        },
                    ],
                },
            ],

            contact: ContactInfo {
                phone: "1-800-RENOBOOK".to_string(),
                email: "hello@renobook.com".to_string(),
                address: "San Francisco, CA".to_string(),
            },

            newsletter: NewsletterCopy {
                title: "Stay Updated".to_string(),
                description: "Get notified about new arrivals, exclusive deals, and tech tips"
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tree_shape() {
        let content = SiteContent::default();

        assert_eq!(content.navigation.len(), 3);
        assert_eq!(content.benefits.len(), 3);
        assert_eq!(content.laptops.len(), 3);
        assert_eq!(content.process.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.footer.len(), 2);
        assert!(content.laptops.iter().all(|laptop| laptop.featured));
    }

    #[test]
    fn test_default_ids_are_unique_per_collection() {
        let content = SiteContent::default();

        let mut nav_ids: Vec<&str> =
            content.navigation.iter().map(|item| item.id.as_str()).collect();
        nav_ids.sort();
        nav_ids.dedup();
        assert_eq!(nav_ids.len(), content.navigation.len());

        let mut laptop_ids: Vec<&str> =
            content.laptops.iter().map(|item| item.id.as_str()).collect();
        laptop_ids.sort();
        laptop_ids.dedup();
        assert_eq!(laptop_ids.len(), content.laptops.len());
    }
}
