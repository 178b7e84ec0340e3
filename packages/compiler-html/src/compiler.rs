use renobook_content::{
    BenefitItem, FooterSection, HeroContent, LaptopProduct, NewsletterCopy, ProcessStep,
    SiteContent, Testimonial,
};

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title shown in the document head
    pub page_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            page_title: "RenoBook — Premium Refurbished Laptops".to_string(),
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render the whole page
pub fn render_page(content: &SiteContent, options: RenderOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    render_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    render_nav(content, &mut ctx);
    render_hero(&content.hero, &mut ctx);
    render_benefits(&content.sorted_benefits(), &mut ctx);
    render_laptops(&content.featured_laptops(), &mut ctx);
    render_process(&content.sorted_process(), &mut ctx);
    render_testimonials(&content.sorted_testimonials(), &mut ctx);
    render_newsletter(&content.newsletter, &mut ctx);
    render_footer(content, &mut ctx);

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn render_head(ctx: &mut Context) {
    let title = escape_html(&ctx.options.page_title);

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.add_line("<link rel=\"stylesheet\" href=\"styles.css\">");
    ctx.dedent();
    ctx.add_line("</head>");
}

fn render_nav(content: &SiteContent, ctx: &mut Context) {
    ctx.add_line("<nav class=\"site-nav\">");
    ctx.indent();

    ctx.add_line("<div class=\"brand\">");
    ctx.indent();
    ctx.add_line("<span class=\"brand-name\">RenoBook</span>");
    ctx.add_line("<span class=\"brand-tagline\">PREMIUM REFURBISHED</span>");
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<ul class=\"nav-links\">");
    ctx.indent();
    for item in content.sorted_navigation() {
        ctx.add_line(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&item.href),
            escape_html(&item.label)
        ));
    }
    ctx.dedent();
    ctx.add_line("</ul>");

    ctx.dedent();
    ctx.add_line("</nav>");
}

fn render_hero(hero: &HeroContent, ctx: &mut Context) {
    ctx.add_line("<section class=\"hero\">");
    ctx.indent();

    // Title splits into prefix + accented subtitle; the full derived title
    // also lands in an aria-label for assistive tech
    ctx.add_line(&format!(
        "<h1 aria-label=\"{}\">",
        escape_html(&hero.display_title())
    ));
    ctx.indent();
    ctx.add_line(&escape_html(hero.title_prefix.trim()));
    ctx.add_line(&format!(
        "<span class=\"accent\">{}</span>",
        escape_html(&hero.subtitle)
    ));
    ctx.dedent();
    ctx.add_line("</h1>");

    ctx.add_line(&format!("<p>{}</p>", escape_html(&hero.description)));
    ctx.add_line(&format!(
        "<button class=\"primary\">{}</button>",
        escape_html(&hero.primary_button_text)
    ));
    ctx.add_line(&format!(
        "<button class=\"secondary\">{}</button>",
        escape_html(&hero.secondary_button_text)
    ));

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_benefits(benefits: &[BenefitItem], ctx: &mut Context) {
    ctx.add_line("<section id=\"about\" class=\"benefits\">");
    ctx.indent();
    ctx.add_line("<h2>Why Choose Refurbished?</h2>");

    for benefit in benefits {
        ctx.add_line(&format!(
            "<div class=\"benefit-card {}\" data-id=\"{}\">",
            benefit.color.css_class(),
            escape_html(&benefit.id)
        ));
        ctx.indent();
        ctx.add_line(&format!(
            "<span class=\"icon\">{}</span>",
            benefit.icon.glyph()
        ));
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(&benefit.title)));
        ctx.add_line(&format!("<p>{}</p>", escape_html(&benefit.description)));
        ctx.dedent();
        ctx.add_line("</div>");
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_laptops(laptops: &[LaptopProduct], ctx: &mut Context) {
    ctx.add_line("<section id=\"laptops\" class=\"laptops\">");
    ctx.indent();
    ctx.add_line("<h2>Featured Laptops</h2>");

    for laptop in laptops {
        ctx.add_line(&format!(
            "<div class=\"laptop-card {}\" data-id=\"{}\">",
            laptop.color.css_class(),
            escape_html(&laptop.id)
        ));
        ctx.indent();
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(&laptop.name)));
        ctx.add_line(&format!(
            "<p class=\"specs\">{}</p>",
            escape_html(&laptop.specs)
        ));
        ctx.add_line(&format!(
            "<span class=\"price\">${}</span> <s class=\"original-price\">${}</s>",
            laptop.price, laptop.original_price
        ));
        ctx.add_line(&format!(
            "<span class=\"rating\">★ {:.1}</span>",
            laptop.rating
        ));
        ctx.add_line("<button>View Details</button>");
        ctx.dedent();
        ctx.add_line("</div>");
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_process(steps: &[ProcessStep], ctx: &mut Context) {
    ctx.add_line("<section class=\"process\">");
    ctx.indent();
    ctx.add_line("<h2>Our Quality Process</h2>");

    for step in steps {
        ctx.add_line(&format!(
            "<div class=\"process-step\" data-id=\"{}\">",
            escape_html(&step.id)
        ));
        ctx.indent();
        ctx.add_line(&format!("<span class=\"step-badge\">{}</span>", step.step));
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(&step.title)));
        ctx.add_line(&format!("<p>{}</p>", escape_html(&step.description)));
        ctx.dedent();
        ctx.add_line("</div>");
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_testimonials(testimonials: &[Testimonial], ctx: &mut Context) {
    ctx.add_line("<section class=\"testimonials\">");
    ctx.indent();
    ctx.add_line("<h2>What Our Customers Say</h2>");

    for testimonial in testimonials {
        ctx.add_line(&format!(
            "<div class=\"testimonial {}\" data-id=\"{}\">",
            testimonial.color.css_class(),
            escape_html(&testimonial.id)
        ));
        ctx.indent();
        ctx.add_line(&format!(
            "<span class=\"stars\">{}</span>",
            "★".repeat(testimonial.rating as usize)
        ));
        ctx.add_line(&format!(
            "<blockquote>{}</blockquote>",
            escape_html(&testimonial.comment)
        ));
        ctx.add_line(&format!(
            "<span class=\"initials\">{}</span>",
            escape_html(&testimonial.initials)
        ));
        ctx.add_line(&format!(
            "<span class=\"author\">{}</span>",
            escape_html(&testimonial.name)
        ));
        if testimonial.verified {
            ctx.add_line("<span class=\"verified\">Verified Buyer</span>");
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_newsletter(newsletter: &NewsletterCopy, ctx: &mut Context) {
    ctx.add_line("<section class=\"newsletter\">");
    ctx.indent();
    ctx.add_line(&format!("<h2>{}</h2>", escape_html(&newsletter.title)));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&newsletter.description)));
    ctx.add_line("<form>");
    ctx.indent();
    ctx.add_line("<input type=\"email\" placeholder=\"Enter your email\" required>");
    ctx.add_line("<button type=\"submit\">Subscribe</button>");
    ctx.dedent();
    ctx.add_line("</form>");
    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_footer(content: &SiteContent, ctx: &mut Context) {
    ctx.add_line("<footer id=\"contact\">");
    ctx.indent();

    for section in content.sorted_footer() {
        render_footer_section(&section, ctx);
    }

    ctx.add_line("<div class=\"footer-contact\">");
    ctx.indent();
    ctx.add_line("<h3>Contact</h3>");
    ctx.add_line(&format!(
        "<span class=\"phone\">☎ {}</span>",
        escape_html(&content.contact.phone)
    ));
    ctx.add_line(&format!(
        "<span class=\"email\">✉ {}</span>",
        escape_html(&content.contact.email)
    ));
    ctx.add_line(&format!(
        "<span class=\"address\">📍 {}</span>",
        escape_html(&content.contact.address)
    ));
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<p class=\"copyright\">&copy; 2025 RenoBook. All rights reserved.</p>");

    ctx.dedent();
    ctx.add_line("</footer>");
}

fn render_footer_section(section: &FooterSection, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"footer-section\" data-id=\"{}\">",
        escape_html(&section.id)
    ));
    ctx.indent();
    ctx.add_line(&format!("<h3>{}</h3>", escape_html(&section.title)));
    ctx.add_line("<ul>");
    ctx.indent();
    for link in &section.links {
        ctx.add_line(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link.href),
            escape_html(&link.label)
        ));
    }
    ctx.dedent();
    ctx.add_line("</ul>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
