// Page sections
//
// Builds the whole portfolio as one list of pre-wrapped lines and records the
// row where each section starts. Every section is a pure function of the
// palette it is given; none of them read the weather mode themselves.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::text::{display_width, gradient_spans, pad_to, wrap_text};
use crate::app::contact::{ContactForm, FormField};
use crate::app::Section;
use crate::content::{
    self, CONTACT_INFO, EXPERIENCE, GITHUB_USER, INTERESTS, JOURNEY, PRACTICES, PROFILE, PROJECTS,
    SKILL_GROUPS, SOCIAL_LINKS, STATS,
};
use crate::theme::palette::{interpolate_color, rgb_of};
use crate::theme::{ThemePalette, BODY_TEXT, DIM_BORDER, MUTED_TEXT};

/// Columns kept free on each side of the page
const MARGIN: usize = 2;

/// Widest the contact form gets
const FORM_WIDTH: usize = 60;

/// Rows of the message box
const MESSAGE_ROWS: usize = 3;

/// Widest a skill bar gets
const SKILL_BAR_WIDTH: usize = 30;

/// red-400
const ERROR_TEXT: Color = Color::Rgb(248, 113, 113);

/// Section title and the line under it
fn heading_copy(section: Section) -> (&'static str, &'static str) {
    match section {
        Section::Home => ("", ""),
        Section::About => (
            "About Me",
            "Building high-performance, fully on-chain decentralized exchanges with deep \
             blockchain architecture expertise and modern AI-assisted development.",
        ),
        Section::Skills => (
            "Skills & Expertise",
            "Blockchain, DeFi, AI-assisted development, and high-performance systems",
        ),
        Section::Experience => (
            "Work Experience",
            "Specialized in blockchain, DeFi, and high-performance trading systems",
        ),
        Section::Projects => (
            "Featured Projects",
            "A showcase of innovative solutions and impactful projects from my career",
        ),
        Section::Engineering => (
            "Senior Engineering Expertise",
            "System design, architecture patterns, and software engineering practices",
        ),
        Section::GitHub => (
            "GitHub Analytics",
            "My coding journey and contributions to open source",
        ),
        Section::Interests => (
            "Beyond Code",
            "When I'm not building the future of Web3, I'm exploring the world and sharing knowledge",
        ),
        Section::Contact => (
            "Get In Touch",
            "Let's collaborate and bring your ideas to life. I'm always open to discussing new projects.",
        ),
    }
}

/// The rendered document
#[derive(Debug, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    /// Start row of each section, in `Section::ALL` order
    pub section_starts: Vec<u16>,
}

impl PageLayout {
    pub fn total_rows(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Build every section for a page `width` columns wide
pub fn build_page(palette: &ThemePalette, form: &ContactForm, phase: f32, width: u16) -> PageLayout {
    let mut page = PageBuilder::new(palette, width as usize, phase);

    for section in Section::ALL {
        page.begin(section);
        match section {
            Section::Home => page.hero(),
            Section::About => page.about(),
            Section::Skills => page.skills(),
            Section::Experience => page.experience(),
            Section::Projects => page.projects(),
            Section::Engineering => page.engineering(),
            Section::GitHub => page.github(),
            Section::Interests => page.interests(),
            Section::Contact => page.contact(form),
        }
    }
    page.footer();

    PageLayout {
        lines: page.lines,
        section_starts: page.starts,
    }
}

struct PageBuilder<'a> {
    palette: &'a ThemePalette,
    /// Usable columns between the margins
    width: usize,
    phase: f32,
    lines: Vec<Line<'static>>,
    starts: Vec<u16>,
}

impl<'a> PageBuilder<'a> {
    fn new(palette: &'a ThemePalette, width: usize, phase: f32) -> Self {
        Self {
            palette,
            width: width.saturating_sub(MARGIN * 2).max(10),
            phase,
            lines: Vec::new(),
            starts: Vec::new(),
        }
    }

    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn begin(&mut self, section: Section) {
        let row = self.row();
        self.starts.push(row);
        let (title, subtitle) = heading_copy(section);
        if !title.is_empty() {
            self.heading(title, subtitle);
        }
    }

    fn push(&mut self, mut spans: Vec<Span<'static>>) {
        spans.insert(0, Span::raw(" ".repeat(MARGIN)));
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let pad = self.width.saturating_sub(used) / 2;
        let mut padded = vec![Span::raw(" ".repeat(pad))];
        padded.extend(spans);
        self.push(padded);
    }

    /// Wrapped paragraph with a fixed prefix on every row
    fn text(&mut self, prefix: Span<'static>, text: &str, style: Style) {
        let room = self.width.saturating_sub(display_width(&prefix.content));
        for row in wrap_text(text, room) {
            self.push(vec![prefix.clone(), Span::styled(row, style)]);
        }
    }

    fn centered_text(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.centered(vec![Span::styled(row, style)]);
        }
    }

    fn heading(&mut self, title: &str, subtitle: &str) {
        self.blank();
        self.blank();
        let spans = gradient_spans(title, &self.palette.text_gradient, self.phase, true);
        self.centered(spans);
        self.centered_text(subtitle, Style::default().fg(MUTED_TEXT));
        self.blank();
    }

    fn tags(&mut self, indent: &str, technologies: &[&str]) {
        let accent = Style::default().fg(self.palette.accent);
        let mut spans = vec![Span::raw(indent.to_string())];
        let mut used = display_width(indent);
        for tech in technologies {
            let tag = format!("[{tech}] ");
            let tag_width = display_width(&tag);
            if used + tag_width > self.width && spans.len() > 1 {
                self.push(std::mem::take(&mut spans));
                spans.push(Span::raw(indent.to_string()));
                used = display_width(indent);
            }
            used += tag_width;
            spans.push(Span::styled(tag, accent));
        }
        self.push(spans);
    }

    fn button(&self, label: &str) -> Vec<Span<'static>> {
        let from = rgb_of(self.palette.button.0, (0, 0, 0));
        let to = rgb_of(self.palette.button.1, from);
        let text = format!("  {label}  ");
        let count = text.chars().count().saturating_sub(1).max(1) as f32;
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .bg(interpolate_color(from, to, i as f32 / count))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect()
    }

    fn hero(&mut self) {
        let palette = self.palette;
        for _ in 0..3 {
            self.blank();
        }
        self.centered(vec![Span::styled(
            PROFILE.nickname,
            Style::default().fg(MUTED_TEXT),
        )]);
        let name = gradient_spans(PROFILE.name, &palette.text_gradient, self.phase, true);
        self.centered(name);
        self.centered(vec![Span::styled(
            PROFILE.role,
            Style::default()
                .fg(palette.secondary)
                .add_modifier(Modifier::BOLD),
        )]);
        self.blank();
        self.centered_text(PROFILE.headline, Style::default().fg(palette.primary));
        self.blank();
        self.centered_text(PROFILE.summary, Style::default().fg(BODY_TEXT));
        self.blank();

        let mut buttons = self.button("View My Work");
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(
            "[ Download Resume ]",
            Style::default().fg(palette.primary),
        ));
        self.centered(buttons);
        self.blank();
        self.centered(vec![Span::styled(
            "↓  scroll  ↓",
            Style::default().fg(MUTED_TEXT),
        )]);
        self.blank();
    }

    fn about(&mut self) {
        let palette = self.palette;

        // Stats in one row when they fit, else one per row
        let cells: Vec<String> = STATS
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect();
        let one_row = cells.iter().map(|c| display_width(c) + 3).sum::<usize>() <= self.width;
        let mut row = Vec::new();
        for (i, stat) in STATS.iter().enumerate() {
            if one_row && i > 0 {
                row.push(Span::styled(" │ ", Style::default().fg(DIM_BORDER)));
            }
            row.extend(gradient_spans(stat.value, &palette.text_gradient, 0.0, true));
            row.push(Span::styled(
                format!(" {}", stat.label),
                Style::default().fg(MUTED_TEXT),
            ));
            if !one_row {
                self.centered(std::mem::take(&mut row));
            }
        }
        if one_row {
            self.centered(row);
        }
        self.blank();

        self.push(vec![Span::styled(
            "My Journey",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )]);
        self.blank();

        let last = JOURNEY.len().saturating_sub(1).max(1) as f32;
        for (i, milestone) in JOURNEY.iter().enumerate() {
            let color = palette.timeline.at(i as f32 / last);
            self.push(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<10}", milestone.year),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    milestone.title,
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let rail = Span::styled("│ ", Style::default().fg(color));
            self.text(rail.clone(), milestone.description, Style::default().fg(BODY_TEXT));
            if i + 1 < JOURNEY.len() {
                self.push(vec![rail]);
            }
        }
    }

    fn skills(&mut self) {
        let palette = self.palette;
        let name_width = SKILL_GROUPS
            .iter()
            .flat_map(|g| g.skills.iter())
            .map(|s| display_width(s.name))
            .max()
            .unwrap_or(0)
            + 2;
        // "  name", bar, " 100% ", level label (dropped on narrow screens)
        let bar_width = self.width.saturating_sub(name_width + 20).min(SKILL_BAR_WIDTH);
        let show_label = bar_width >= 5;
        let bar_width = if show_label {
            bar_width
        } else {
            self.width.saturating_sub(name_width + 8).min(SKILL_BAR_WIDTH)
        };

        for (g, group) in SKILL_GROUPS.iter().enumerate() {
            if g > 0 {
                self.blank();
            }
            self.push(vec![Span::styled(
                group.name,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )]);
            for skill in group.skills {
                let filled = (bar_width * skill.level as usize).div_ceil(100).min(bar_width);
                let mut spans = vec![Span::styled(
                    format!("  {}", pad_to(skill.name, name_width)),
                    Style::default().fg(BODY_TEXT),
                )];
                for j in 0..bar_width {
                    if j < filled {
                        let color = palette
                            .text_gradient
                            .at(j as f32 / bar_width.saturating_sub(1).max(1) as f32);
                        spans.push(Span::styled("█", Style::default().fg(color)));
                    } else {
                        spans.push(Span::styled("░", Style::default().fg(DIM_BORDER)));
                    }
                }
                spans.push(Span::styled(
                    format!(" {:>3}% ", skill.level),
                    Style::default().fg(palette.secondary),
                ));
                if show_label {
                    spans.push(Span::styled(
                        content::skill_level_label(skill.level),
                        Style::default().fg(MUTED_TEXT),
                    ));
                }
                self.push(spans);
            }
        }
    }

    fn experience(&mut self) {
        let palette = self.palette;
        let last = EXPERIENCE.len().saturating_sub(1).max(1) as f32;

        for (i, job) in EXPERIENCE.iter().enumerate() {
            let color = palette.timeline.at(i as f32 / last);
            let rail = Span::styled("│ ", Style::default().fg(color));

            self.push(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    job.title,
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let mut company = vec![rail.clone()];
            company.extend(gradient_spans(job.company, &palette.text_gradient, 0.0, true));
            self.push(company);
            self.push(vec![
                rail.clone(),
                Span::styled(
                    format!("{} · {}", job.period, job.location),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]);
            self.text(rail.clone(), job.description, Style::default().fg(BODY_TEXT));
            for achievement in job.achievements {
                self.text(
                    Span::styled("│   ▸ ", Style::default().fg(color)),
                    achievement,
                    Style::default().fg(BODY_TEXT),
                );
            }
            self.tags("│ ", job.technologies);
            if i + 1 < EXPERIENCE.len() {
                self.push(vec![rail]);
            }
        }
    }

    fn projects(&mut self) {
        let palette = self.palette;
        for (i, project) in PROJECTS.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.push(vec![
                Span::styled("◆ ", Style::default().fg(palette.accent)),
                Span::styled(
                    project.title,
                    Style::default()
                        .fg(palette.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            self.text(Span::raw("  "), project.description, Style::default().fg(BODY_TEXT));
            self.tags("  ", project.technologies);
        }
    }

    fn engineering(&mut self) {
        let palette = self.palette;
        for (i, practice) in PRACTICES.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.push(vec![
                Span::styled("■ ", Style::default().fg(palette.accent)),
                Span::styled(
                    practice.category,
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            for item in practice.items {
                self.text(
                    Span::styled("  • ", Style::default().fg(palette.accent)),
                    item,
                    Style::default().fg(BODY_TEXT),
                );
            }
        }
    }

    fn github(&mut self) {
        let palette = self.palette;
        self.push(vec![
            Span::styled(
                "GitHub Profile  ",
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("@{GITHUB_USER}"),
                Style::default().fg(palette.highlight),
            ),
        ]);
        if let Some(link) = SOCIAL_LINKS.iter().find(|l| l.label == "GitHub") {
            self.push(vec![Span::styled(
                link.href,
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::UNDERLINED),
            )]);
        }
        self.blank();

        let panels = [
            ("Top Languages", "Most used programming languages"),
            ("Contribution Streak", "Daily coding commitment"),
            ("Activity Graph", "Contribution activity timeline"),
            ("WakaTime Coding Activity", "Weekly coding statistics and time tracking"),
        ];
        for (title, caption) in panels {
            self.push(vec![
                Span::styled("▣ ", Style::default().fg(palette.accent)),
                Span::styled(title, Style::default().fg(palette.secondary)),
            ]);
            self.text(Span::raw("  "), caption, Style::default().fg(MUTED_TEXT));
        }
        self.blank();
        self.text(
            Span::raw(""),
            "Live charts are hosted on the web; open the profile link to view them.",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        );
    }

    fn interests(&mut self) {
        let palette = self.palette;
        for (i, group) in INTERESTS.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            let title = gradient_spans(group.title, &palette.text_gradient, self.phase, true);
            self.push(title);
            for interest in group.items {
                self.text(
                    Span::styled("  ✦ ", Style::default().fg(palette.accent)),
                    &format!("{} - {}", interest.name, interest.description),
                    Style::default().fg(BODY_TEXT),
                );
            }
        }
    }

    fn contact(&mut self, form: &ContactForm) {
        let palette = self.palette;

        for info in CONTACT_INFO {
            self.push(vec![
                Span::styled(
                    format!("{:<10}", info.label),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(info.value, Style::default().fg(BODY_TEXT)),
            ]);
        }
        for link in SOCIAL_LINKS {
            self.push(vec![
                Span::styled(
                    format!("{:<10}", link.label),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    link.href,
                    Style::default()
                        .fg(MUTED_TEXT)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]);
        }
        self.blank();

        let box_width = self.width.min(FORM_WIDTH);
        for field in FormField::ALL {
            self.form_field(form, field, box_width);
        }

        if let Some(error) = form.error {
            self.push(vec![Span::styled(
                format!("✗ {error}"),
                Style::default().fg(ERROR_TEXT),
            )]);
        }

        let label = if form.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        };
        self.push(self.button(label));

        if let Some(notice) = form.notice() {
            self.blank();
            self.push(vec![Span::styled(
                format!("✓ {notice}"),
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )]);
        }

        self.blank();
        let hint = if form.editing {
            "Tab next field · Enter on Message sends · Esc done"
        } else {
            "Press c to write a message"
        };
        self.push(vec![Span::styled(hint, Style::default().fg(MUTED_TEXT))]);
    }

    fn form_field(&mut self, form: &ContactForm, field: FormField, box_width: usize) {
        let focused = form.editing && form.focus == field;
        let border = Style::default().fg(if focused {
            self.palette.focus
        } else {
            DIM_BORDER
        });
        let inner = box_width.saturating_sub(4).max(1);

        self.push(vec![
            Span::styled(field.label(), Style::default().fg(BODY_TEXT)),
            Span::styled(" *", Style::default().fg(self.palette.accent)),
        ]);
        self.push(vec![Span::styled(
            format!("╭{}╮", "─".repeat(inner + 2)),
            border,
        )]);

        let value = form.value(field);
        let rows = match field {
            FormField::Message => MESSAGE_ROWS,
            _ => 1,
        };
        let (body, style) = if value.is_empty() && !focused {
            (
                vec![field.placeholder().to_string()],
                Style::default().fg(MUTED_TEXT),
            )
        } else {
            let text = if focused {
                format!("{value}▏")
            } else {
                value.to_string()
            };
            let wrapped = if rows > 1 {
                wrap_text(&text, inner)
            } else {
                vec![tail_fit(&text, inner)]
            };
            // Keep the end of the text (and the cursor) visible
            let skip = wrapped.len().saturating_sub(rows);
            (
                wrapped.into_iter().skip(skip).collect(),
                Style::default().fg(BODY_TEXT),
            )
        };

        for r in 0..rows {
            let content = body.get(r).map(String::as_str).unwrap_or("");
            self.push(vec![
                Span::styled("│ ", border),
                Span::styled(pad_to(content, inner), style),
                Span::styled(" │", border),
            ]);
        }
        self.push(vec![Span::styled(
            format!("╰{}╯", "─".repeat(inner + 2)),
            border,
        )]);
    }

    fn footer(&mut self) {
        self.blank();
        self.centered(vec![Span::styled(
            format!("{} · {}", PROFILE.name, PROFILE.role),
            Style::default().fg(MUTED_TEXT),
        )]);
        self.blank();
    }
}

/// Last `width` columns of `text`
fn tail_fit(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}
