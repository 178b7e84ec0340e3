use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use renobook_editor::{
    BenefitField, ContactField, ContentStore, FileStorage, FooterLinkField, HeroField,
    LaptopField, Mutation, NavigationField, NewsletterField, ProcessField, TestimonialField,
};

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Collection: navigation, hero, benefits, laptops, process,
    /// testimonials, footer, footer-link, contact, newsletter
    pub collection: String,

    /// Entry id ("-" for singletons; "section:link" for footer-link)
    pub id: String,

    /// Field name, camelCase as in the content snapshot
    pub field: String,

    /// New value (numeric fields coerce, bad input becomes 0)
    pub value: String,
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = ContentStore::load(FileStorage::new(config.get_content_dir(cwd)));

    let mutation = parse_mutation(&args)?;
    let changed = store.apply(&mutation)?;

    if changed {
        println!(
            "  {} {}.{} = {:?}",
            "✓".green(),
            args.collection,
            args.field,
            args.value
        );
    } else {
        println!(
            "  {} no entry with id {:?} in {}",
            "⚠".yellow(),
            args.id,
            args.collection
        );
    }

    Ok(())
}

fn parse_mutation(args: &SetArgs) -> Result<Mutation> {
    let id = args.id.clone();
    let value = args.value.clone();
    let field = args.field.as_str();

    let unknown_field = || anyhow!("Unknown field {:?} for {}", args.field, args.collection);

    let mutation = match args.collection.as_str() {
        "hero" => Mutation::SetHeroField {
            field: match field {
                "titlePrefix" => HeroField::TitlePrefix,
                "subtitle" => HeroField::Subtitle,
                "description" => HeroField::Description,
                "primaryButtonText" => HeroField::PrimaryButtonText,
                "secondaryButtonText" => HeroField::SecondaryButtonText,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "navigation" => Mutation::SetNavigationField {
            id,
            field: match field {
                "label" => NavigationField::Label,
                "href" => NavigationField::Href,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "benefits" => Mutation::SetBenefitField {
            id,
            field: match field {
                "icon" => BenefitField::Icon,
                "title" => BenefitField::Title,
                "description" => BenefitField::Description,
                "color" => BenefitField::Color,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "laptops" => Mutation::SetLaptopField {
            id,
            field: match field {
                "name" => LaptopField::Name,
                "specs" => LaptopField::Specs,
                "price" => LaptopField::Price,
                "originalPrice" => LaptopField::OriginalPrice,
                "rating" => LaptopField::Rating,
                "color" => LaptopField::Color,
                "featured" => LaptopField::Featured,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "process" => Mutation::SetProcessField {
            id,
            field: match field {
                "step" => ProcessField::Step,
                "title" => ProcessField::Title,
                "description" => ProcessField::Description,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "testimonials" => Mutation::SetTestimonialField {
            id,
            field: match field {
                "name" => TestimonialField::Name,
                "initials" => TestimonialField::Initials,
                "rating" => TestimonialField::Rating,
                "comment" => TestimonialField::Comment,
                "verified" => TestimonialField::Verified,
                "color" => TestimonialField::Color,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "footer" => match field {
            "title" => Mutation::SetFooterTitle { id, value },
            _ => return Err(unknown_field()),
        },

        "footer-link" => {
            let (section_id, link_id) = id
                .split_once(':')
                .ok_or_else(|| anyhow!("footer-link id must be \"section:link\""))?;
            Mutation::SetFooterLink {
                section_id: section_id.to_string(),
                link_id: link_id.to_string(),
                field: match field {
                    "label" => FooterLinkField::Label,
                    "href" => FooterLinkField::Href,
                    _ => return Err(unknown_field()),
                },
                value,
            }
        }

        "contact" => Mutation::SetContactField {
            field: match field {
                "phone" => ContactField::Phone,
                "email" => ContactField::Email,
                "address" => ContactField::Address,
                _ => return Err(unknown_field()),
            },
            value,
        },

        "newsletter" => Mutation::SetNewsletterField {
            field: match field {
                "title" => NewsletterField::Title,
                "description" => NewsletterField::Description,
                _ => return Err(unknown_field()),
            },
            value,
        },

        _ => return Err(anyhow!("Unknown collection {:?}", args.collection)),
    };

    Ok(mutation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(collection: &str, id: &str, field: &str, value: &str) -> SetArgs {
        SetArgs {
            collection: collection.to_string(),
            id: id.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_laptop_price() {
        let mutation = parse_mutation(&args("laptops", "laptop-1", "price", "829")).unwrap();
        assert_eq!(
            mutation,
            Mutation::SetLaptopField {
                id: "laptop-1".to_string(),
                field: LaptopField::Price,
                value: "829".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_footer_link_id() {
        let mutation =
            parse_mutation(&args("footer-link", "footer-1:shop-2", "label", "Linux")).unwrap();
        assert_eq!(
            mutation,
            Mutation::SetFooterLink {
                section_id: "footer-1".to_string(),
                link_id: "shop-2".to_string(),
                field: FooterLinkField::Label,
                value: "Linux".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_collection_is_an_error() {
        assert!(parse_mutation(&args("widgets", "w-1", "title", "x")).is_err());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        assert!(parse_mutation(&args("hero", "-", "title", "x")).is_err());
    }
}
