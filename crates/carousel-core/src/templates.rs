//! Built-in slide templates and the layout grid they share.

use crate::config::{CanvasSize, DEFAULT_PAGE_NAME};
use crate::element::{Element, TextAlign, TextStyle};
use crate::slide::Slide;
use crate::theme::{Theme, ThemeMode};
use kurbo::{Point, Size};

/// Margin kept clear on every side of the canvas.
pub const SAFE_PADDING: f64 = 64.0;
/// Height of the username header band.
pub const HEADER_HEIGHT: f64 = 80.0;
/// Height of the footer band.
pub const FOOTER_HEIGHT: f64 = 60.0;

const HEADING_FONT: &str = "JetBrains Mono";

/// Typographic role of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Username,
    Title,
    Subtitle,
    Body,
    Footer,
}

impl TextRole {
    /// Preset style for this role in the given mode.
    pub fn style(&self, mode: ThemeMode) -> TextStyle {
        let dark = mode.is_dark();
        let style = match self {
            TextRole::Username if dark => TextStyle::new(26.0, 600, "#38bdf8").with_letter_spacing(0.5),
            TextRole::Username => TextStyle::new(24.0, 600, "#2563eb").with_letter_spacing(0.0),
            TextRole::Title if dark => TextStyle::new(56.0, 700, "#f8fafc").with_line_height(1.2),
            TextRole::Title => TextStyle::new(54.0, 700, "#0f172a").with_line_height(1.2),
            TextRole::Subtitle if dark => TextStyle::new(32.0, 500, "#cbd5f5"),
            TextRole::Subtitle => TextStyle::new(30.0, 500, "#475569"),
            TextRole::Body if dark => TextStyle::new(26.0, 400, "#e5e7eb").with_line_height(1.5),
            TextRole::Body => TextStyle::new(26.0, 400, "#0f172a").with_line_height(1.5),
            TextRole::Footer if dark => TextStyle::new(22.0, 500, "#94a3b8"),
            TextRole::Footer => TextStyle::new(22.0, 500, "#64748b"),
        };
        style.with_align(TextAlign::Center)
    }
}

/// Template picker category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Blank,
    Intro,
    Tips,
    Quote,
    Code,
    Cta,
    Content,
}

/// Which built-in layout a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Blank,
    Intro,
    TipsList,
    Quote,
    CodeSnippet,
    CallToAction,
    Content,
}

/// A named slide factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub kind: TemplateKind,
}

const TEMPLATES: &[Template] = &[
    Template {
        id: "blank",
        name: "Blank",
        description: "Start with an empty canvas",
        category: TemplateCategory::Blank,
        kind: TemplateKind::Blank,
    },
    Template {
        id: "intro",
        name: "Intro Slide",
        description: "Perfect for carousel openers",
        category: TemplateCategory::Intro,
        kind: TemplateKind::Intro,
    },
    Template {
        id: "tips-list",
        name: "5 Tips List",
        description: "Numbered tips or steps",
        category: TemplateCategory::Tips,
        kind: TemplateKind::TipsList,
    },
    Template {
        id: "quote",
        name: "Quote",
        description: "Inspirational quote layout",
        category: TemplateCategory::Quote,
        kind: TemplateKind::Quote,
    },
    Template {
        id: "code-snippet",
        name: "Code Snippet",
        description: "Show off your code",
        category: TemplateCategory::Code,
        kind: TemplateKind::CodeSnippet,
    },
    Template {
        id: "cta",
        name: "Call to Action",
        description: "End slide with CTA",
        category: TemplateCategory::Cta,
        kind: TemplateKind::CallToAction,
    },
    Template {
        id: "content",
        name: "Content Slide",
        description: "Title with bullet points",
        category: TemplateCategory::Content,
        kind: TemplateKind::Content,
    },
];

impl Template {
    /// All built-in templates.
    pub fn all() -> &'static [Template] {
        TEMPLATES
    }

    pub fn find(id: &str) -> Option<&'static Template> {
        TEMPLATES.iter().find(|template| template.id == id)
    }

    pub fn in_category(category: TemplateCategory) -> impl Iterator<Item = &'static Template> {
        TEMPLATES.iter().filter(move |template| template.category == category)
    }

    /// Build a fresh slide for the given canvas and mode.
    pub fn create_slide(&self, canvas: &CanvasSize, mode: ThemeMode) -> Slide {
        let grid = Grid::new(canvas, mode);
        let background = match mode {
            ThemeMode::Dark => Theme::dark().background,
            ThemeMode::Light => Theme::light().background,
        };
        let elements = match self.kind {
            TemplateKind::Blank => Vec::new(),
            TemplateKind::Intro => vec![
                grid.header(),
                grid.text(
                    0.4,
                    120.0,
                    "Your Amazing\nTitle Here",
                    grid.role(TextRole::Title).with_family(HEADING_FONT),
                ),
                grid.text(
                    0.55,
                    60.0,
                    "A compelling subtitle that hooks your audience",
                    grid.role(TextRole::Subtitle),
                ),
                grid.footer("Swipe 👉 | Follow @yourusername", grid.role(TextRole::Footer)),
            ],
            TemplateKind::TipsList => vec![
                grid.header(),
                grid.text(0.18, 80.0, "5 Tips for Better Code", grid.heading(44.0)),
                grid.text(
                    0.5,
                    350.0,
                    "1. Write clean, readable code\n\n2. Use meaningful variable names\n\n3. Keep functions small and focused\n\n4. Comment your complex logic\n\n5. Test before you deploy",
                    grid.body(28.0, 500, 1.4),
                ),
                grid.footer("Save this 💾 | Follow @yourusername", grid.role(TextRole::Footer)),
            ],
            TemplateKind::Quote => vec![
                grid.header(),
                grid.text(
                    0.35,
                    200.0,
                    "\"The only way to do great work is to love what you do.\"",
                    TextStyle::new(42.0, 600, grid.color(TextRole::Title))
                        .with_family("Playfair Display")
                        .with_align(TextAlign::Center)
                        .with_line_height(1.4),
                )
                .inset(80.0),
                grid.text(
                    0.6,
                    50.0,
                    "— Steve Jobs",
                    TextStyle::new(24.0, 500, grid.accent()).with_align(TextAlign::Center),
                ),
                grid.footer("Follow @yourusername", grid.role(TextRole::Footer)),
            ],
            TemplateKind::CodeSnippet => vec![
                grid.header(),
                grid.text(0.18, 60.0, "JavaScript Tip 💡", grid.heading(40.0)),
                grid.text(
                    0.5,
                    280.0,
                    "// Array destructuring\nconst [first, ...rest] = array;\n\n// Object destructuring\nconst { name, age } = user;\n\n// Default values\nconst { theme = \"dark\" } = config;",
                    TextStyle::new(24.0, 500, if mode.is_dark() { "#22c55e" } else { "#16a34a" })
                        .with_family(HEADING_FONT)
                        .with_line_height(1.6),
                )
                .inset(40.0),
                grid.footer("Save this 💾 | Follow @yourusername", grid.role(TextRole::Footer)),
            ],
            TemplateKind::CallToAction => vec![
                grid.header(),
                grid.text(0.35, 100.0, "Found this helpful?", grid.heading(48.0)),
                grid.text(
                    0.52,
                    150.0,
                    "❤️ Like this post\n💾 Save for later\n🔄 Share with friends\n👤 Follow for more",
                    grid.body(32.0, 500, 1.6).with_align(TextAlign::Center),
                ),
                grid.footer(
                    "Follow @yourusername 🚀",
                    TextStyle::new(22.0, 500, grid.accent()).with_align(TextAlign::Center),
                ),
            ],
            TemplateKind::Content => vec![
                grid.header(),
                grid.text(0.2, 80.0, "Section Title", grid.heading(48.0)),
                grid.text(
                    0.5,
                    300.0,
                    "• First key point goes here\n\n• Second important detail\n\n• Third valuable insight\n\n• Final takeaway message",
                    grid.body(28.0, 400, 1.5),
                ),
                grid.footer("Swipe 👉 | Follow @yourusername", grid.role(TextRole::Footer)),
            ],
        }
        .into_iter()
        .map(Placed::into_element)
        .collect();

        Slide::with_elements(background, elements)
    }
}

/// A text element being laid out on the template grid.
struct Placed(Element);

impl Placed {
    /// Narrow the element by `amount`, keeping it centered.
    fn inset(mut self, amount: f64) -> Self {
        self.0.width -= amount;
        self
    }

    fn into_element(self) -> Element {
        self.0
    }
}

/// Canvas-relative positions shared by every template.
struct Grid {
    width: f64,
    height: f64,
    mode: ThemeMode,
}

impl Grid {
    fn new(canvas: &CanvasSize, mode: ThemeMode) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            mode,
        }
    }

    fn content_width(&self) -> f64 {
        self.width - SAFE_PADDING * 2.0
    }

    fn role(&self, role: TextRole) -> TextStyle {
        role.style(self.mode)
    }

    fn color(&self, role: TextRole) -> String {
        self.role(role).color
    }

    fn accent(&self) -> &'static str {
        if self.mode.is_dark() { "#38bdf8" } else { "#2563eb" }
    }

    fn heading(&self, font_size: f64) -> TextStyle {
        TextStyle::new(font_size, 700, self.color(TextRole::Title))
            .with_family(HEADING_FONT)
            .with_align(TextAlign::Center)
    }

    fn body(&self, font_size: f64, font_weight: u16, line_height: f64) -> TextStyle {
        TextStyle::new(font_size, font_weight, self.color(TextRole::Body)).with_line_height(line_height)
    }

    /// Full-width text centered horizontally at `fraction` of the canvas height.
    fn text(&self, fraction: f64, height: f64, content: &str, style: TextStyle) -> Placed {
        Placed(Element::text(
            Point::new(self.width / 2.0, self.height * fraction),
            Size::new(self.content_width(), height),
            content,
            style,
        ))
    }

    fn header(&self) -> Placed {
        Placed(Element::text(
            Point::new(self.width / 2.0, SAFE_PADDING + HEADER_HEIGHT / 2.0),
            Size::new(self.content_width(), 40.0),
            DEFAULT_PAGE_NAME,
            self.role(TextRole::Username),
        ))
    }

    fn footer(&self, content: &str, style: TextStyle) -> Placed {
        Placed(Element::text(
            Point::new(
                self.width / 2.0,
                self.height - SAFE_PADDING - FOOTER_HEIGHT / 2.0,
            ),
            Size::new(self.content_width(), FOOTER_HEIGHT),
            content,
            style,
        ))
    }
}
