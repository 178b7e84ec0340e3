use crate::{render_page, RenderOptions};
use renobook_content::SiteContent;
use renobook_editor::{LaptopField, Mutation, TestimonialField};

fn laptop_card_count(html: &str) -> usize {
    html.matches("class=\"laptop-card").count()
}

#[test]
fn test_render_default_page() {
    let content = SiteContent::default();
    let html = render_page(&content, RenderOptions::default());

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Premium Refurbished"));
    assert!(html.contains("<span class=\"accent\">Laptops</span>"));
    assert!(html.contains("MacBook Pro 13&quot;"));
    assert!(html.contains("Stay Updated"));
    assert!(html.contains("1-800-RENOBOOK"));
    assert_eq!(laptop_card_count(&html), 3);
}

#[test]
fn test_nav_renders_in_ascending_order() {
    let mut content = SiteContent::default();
    // Shuffle storage order; rendering must re-sort
    content.navigation.swap(0, 2);

    let html = render_page(&content, RenderOptions::default());
    let laptops_at = html.find(">Laptops</a>").unwrap();
    let about_at = html.find(">About</a>").unwrap();
    let contact_at = html.find(">Contact</a>").unwrap();

    assert!(laptops_at < about_at);
    assert!(about_at < contact_at);
}

#[test]
fn test_unfeaturing_a_laptop_removes_exactly_one_card() {
    let mut content = SiteContent::default();

    let mutation = Mutation::SetLaptopField {
        id: "laptop-2".to_string(),
        field: LaptopField::Featured,
        value: "false".to_string(),
    };
    assert!(mutation.apply(&mut content));

    let html = render_page(&content, RenderOptions::default());
    assert_eq!(laptop_card_count(&html), 2);
    assert!(!html.contains("Dell XPS 13"));

    // Remaining cards still in ascending order
    let first = html.find("data-id=\"laptop-1\"").unwrap();
    let third = html.find("data-id=\"laptop-3\"").unwrap();
    assert!(first < third);
}

#[test]
fn test_testimonial_rating_controls_star_count() {
    let mut content = SiteContent::default();

    let mutation = Mutation::SetTestimonialField {
        id: "testimonial-1".to_string(),
        field: TestimonialField::Rating,
        value: "3".to_string(),
    };
    assert!(mutation.apply(&mut content));

    let html = render_page(&content, RenderOptions::default());
    assert!(html.contains("<span class=\"stars\">★★★</span>"));
    // The other two testimonials still show five stars
    assert_eq!(html.matches("<span class=\"stars\">★★★★★</span>").count(), 2);
}

#[test]
fn test_text_is_html_escaped() {
    let mut content = SiteContent::default();
    content.hero.description = "Deals <b>& steals</b>".to_string();

    let html = render_page(&content, RenderOptions::default());
    assert!(html.contains("Deals &lt;b&gt;&amp; steals&lt;/b&gt;"));
    assert!(!html.contains("<b>& steals</b>"));
}

#[test]
fn test_compact_output_without_pretty() {
    let content = SiteContent::default();
    let options = RenderOptions {
        pretty: false,
        ..RenderOptions::default()
    };

    let html = render_page(&content, options);
    assert!(!html.contains('\n'));
    assert!(html.contains("<!DOCTYPE html><html"));
}
