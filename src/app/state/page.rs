//! Estimated page layout.
//!
//! The page is a stack of fixed-height items per column. Heights come from
//! the text estimator, and the view renders every item at exactly that
//! height, so the rectangles recorded here are the rectangles on screen.

use super::constants::{
    BULLET_INDENT_EM, COLUMN_GAP_PX, DETAIL_SCALE, ENTRY_SCALE, HEADING_SCALE, HEADLINE_SCALE,
    ITEM_GAP_EM, MAIN_PORTION, MOBILE_BREAKPOINT_PX, NAME_SCALE, SECTION_GAP_EM, SIDEBAR_PORTION,
};
use crate::resume::Resume;
use crate::reveal::{BlockGeometry, TextBlock, TextMetrics, estimate_text_height};
use crate::text_utils::split_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Clearance,
    Education,
    Certificates,
    Skills,
    Languages,
}

impl SectionId {
    /// Sections offered in the toolbar.
    pub const NAVIGABLE: [SectionId; 7] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Clearance,
        SectionId::Education,
        SectionId::Certificates,
        SectionId::Skills,
        SectionId::Languages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Clearance => "Clearance",
            SectionId::Education => "Education",
            SectionId::Certificates => "Certificates",
            SectionId::Skills => "Skills",
            SectionId::Languages => "Languages",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Name,
    Headline,
    Detail(String),
    Heading(SectionId),
    Body(String),
    /// Index into the reveal blocks.
    Reveal(usize),
    /// Index into the resume's experience list.
    EntryTitle(usize),
    Gap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub kind: ItemKind,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct PageColumn {
    pub portion: u16,
    pub sidebar: bool,
    pub items: Vec<PlacedItem>,
}

/// Font and margin inputs to the layout.
#[derive(Debug, Clone, Copy)]
pub struct PageStyle {
    pub font_size: f32,
    pub line_spacing: f32,
    pub margin_horizontal: f32,
    pub margin_vertical: f32,
}

impl PageStyle {
    pub fn body(&self) -> TextMetrics {
        self.scaled(1.0)
    }

    pub fn scaled(&self, scale: f32) -> TextMetrics {
        TextMetrics::new(self.font_size * scale, self.line_spacing)
    }

    /// Metrics for text drawn in the monospace face.
    pub fn monospace(&self, scale: f32) -> TextMetrics {
        TextMetrics::monospace(self.font_size * scale, self.line_spacing)
    }

    pub fn bullet_indent(&self) -> f32 {
        self.font_size * BULLET_INDENT_EM
    }
}

#[derive(Debug, Clone)]
pub struct PageModel {
    columns: Vec<PageColumn>,
    content_height: f32,
    blocks: Vec<Option<BlockGeometry>>,
    layout_width: f32,
}

/// Collects items for one column, tracking the running top edge.
struct ColumnBuilder<'a> {
    style: &'a PageStyle,
    width: f32,
    cursor: f32,
    items: Vec<PlacedItem>,
    blocks: Vec<(usize, BlockGeometry)>,
}

impl<'a> ColumnBuilder<'a> {
    fn new(style: &'a PageStyle, width: f32) -> Self {
        Self {
            style,
            width: width.max(1.0),
            cursor: style.margin_vertical,
            items: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn push(&mut self, kind: ItemKind, height: f32) {
        self.items.push(PlacedItem {
            kind,
            top: self.cursor,
            height,
        });
        self.cursor += height;
    }

    fn text(&mut self, kind: ItemKind, text: &str, scale: f32) {
        let metrics = self.style.scaled(scale);
        self.text_with(kind, text, &metrics);
    }

    fn text_with(&mut self, kind: ItemKind, text: &str, metrics: &TextMetrics) {
        let words = split_words(text);
        let height = estimate_text_height(words.iter().map(String::as_str), self.width, metrics);
        if height > 0.0 {
            self.push(kind, height);
        }
    }

    fn gap(&mut self, em: f32) {
        self.push(ItemKind::Gap, self.style.font_size * em);
    }

    fn heading(&mut self, section: SectionId) {
        if !self.items.is_empty() {
            self.gap(SECTION_GAP_EM);
        }
        let height = self.style.scaled(HEADING_SCALE).line_height();
        self.push(ItemKind::Heading(section), height);
        self.gap(ITEM_GAP_EM);
    }

    fn reveal(&mut self, index: usize, block: &TextBlock, bulleted: bool) {
        let metrics = self.style.body();
        let width = if bulleted {
            self.width - self.style.bullet_indent()
        } else {
            self.width
        };
        let height: f32 = block
            .lines()
            .iter()
            .map(|line| estimate_text_height(line.iter().map(String::as_str), width, &metrics))
            .sum();
        self.blocks.push((
            index,
            BlockGeometry {
                top: self.cursor,
                height,
            },
        ));
        self.push(ItemKind::Reveal(index), height);
    }

    fn height(&self) -> f32 {
        self.cursor + self.style.margin_vertical
    }
}

impl PageModel {
    /// Lay out the resume for a viewport `viewport_width` pixels wide.
    pub fn build(
        resume: &Resume,
        blocks: &[TextBlock],
        style: &PageStyle,
        viewport_width: f32,
    ) -> Self {
        let available = (viewport_width - 2.0 * style.margin_horizontal).max(1.0);
        let two_columns = viewport_width >= MOBILE_BREAKPOINT_PX;

        let mut parts: Vec<(u16, bool, ColumnBuilder<'_>)> = Vec::new();
        if two_columns {
            let shared = (available - COLUMN_GAP_PX).max(2.0);
            let total = f32::from(SIDEBAR_PORTION + MAIN_PORTION);
            let mut sidebar =
                ColumnBuilder::new(style, shared * f32::from(SIDEBAR_PORTION) / total);
            let mut main = ColumnBuilder::new(style, shared * f32::from(MAIN_PORTION) / total);
            push_profile(&mut sidebar, resume, blocks);
            push_secondary(&mut sidebar, resume);
            push_experience(&mut main, resume, blocks);
            parts.push((SIDEBAR_PORTION, true, sidebar));
            parts.push((MAIN_PORTION, false, main));
        } else {
            let mut single = ColumnBuilder::new(style, available);
            push_profile(&mut single, resume, blocks);
            push_experience(&mut single, resume, blocks);
            push_secondary(&mut single, resume);
            parts.push((1, false, single));
        }

        let content_height = parts
            .iter()
            .map(|(_, _, column)| column.height())
            .fold(0.0f32, f32::max);
        let mut geometry = vec![None; blocks.len()];
        let mut columns = Vec::with_capacity(parts.len());
        for (portion, sidebar, column) in parts {
            for (index, rect) in column.blocks {
                if let Some(slot) = geometry.get_mut(index) {
                    *slot = Some(rect);
                }
            }
            columns.push(PageColumn {
                portion,
                sidebar,
                items: column.items,
            });
        }

        PageModel {
            columns,
            content_height,
            blocks: geometry,
            layout_width: viewport_width,
        }
    }

    pub fn columns(&self) -> &[PageColumn] {
        &self.columns
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn layout_width(&self) -> f32 {
        self.layout_width
    }

    pub fn is_single_column(&self) -> bool {
        self.columns.len() == 1
    }

    pub fn block_geometry(&self, index: usize) -> Option<BlockGeometry> {
        self.blocks.get(index).copied().flatten()
    }

    /// Top edge of a section in content coordinates.
    pub fn section_top(&self, section: SectionId) -> Option<f32> {
        if section == SectionId::Home {
            return Some(0.0);
        }
        self.columns
            .iter()
            .flat_map(|column| column.items.iter())
            .find(|item| item.kind == ItemKind::Heading(section))
            .map(|item| item.top)
    }
}

fn push_profile(column: &mut ColumnBuilder<'_>, resume: &Resume, blocks: &[TextBlock]) {
    let personal = &resume.personal;
    column.text(ItemKind::Name, &personal.name.to_uppercase(), NAME_SCALE);
    // The headline is drawn in the monospace face.
    let headline = column.style.monospace(HEADLINE_SCALE);
    column.text_with(ItemKind::Headline, &personal.title, &headline);
    column.gap(ITEM_GAP_EM);

    for detail in [&personal.location, &personal.email, &personal.phone] {
        if !detail.is_empty() {
            column.text(ItemKind::Detail(detail.clone()), detail, DETAIL_SCALE);
        }
    }
    for link in &resume.socials {
        let line = format!("{}: {}", link.platform, link.username);
        column.text(ItemKind::Detail(line.clone()), &line, DETAIL_SCALE);
    }

    if let Some((index, block)) = blocks
        .iter()
        .enumerate()
        .find(|(_, block)| block.id() == crate::resume::ABOUT_BLOCK_ID)
    {
        column.heading(SectionId::About);
        column.reveal(index, block, false);
    }
}

fn push_experience(column: &mut ColumnBuilder<'_>, resume: &Resume, blocks: &[TextBlock]) {
    column.heading(SectionId::Experience);
    let mut first = true;
    for (job_index, job) in resume.experience.iter().enumerate() {
        if job.hidden {
            continue;
        }
        if !first {
            column.gap(SECTION_GAP_EM);
        }
        first = false;
        let title = format!("{} | {}", job.role, job.company);
        column.text(ItemKind::EntryTitle(job_index), &title, ENTRY_SCALE);
        if !job.period.is_empty() {
            column.text(ItemKind::Detail(job.period.clone()), &job.period, DETAIL_SCALE);
        }
        column.gap(ITEM_GAP_EM * 0.5);
        if let Some((index, block)) = blocks
            .iter()
            .enumerate()
            .find(|(_, block)| block.id() == job.id)
        {
            column.reveal(index, block, true);
        }
    }
}

fn push_secondary(column: &mut ColumnBuilder<'_>, resume: &Resume) {
    if !resume.clearance.is_empty() {
        column.heading(SectionId::Clearance);
        column.text(ItemKind::Body(resume.clearance.clone()), &resume.clearance, 1.0);
    }
    if !resume.education.is_empty() {
        column.heading(SectionId::Education);
        for item in &resume.education {
            column.text(ItemKind::Body(item.degree.clone()), &item.degree, 1.0);
            let detail = format!("{} · {}", item.school, item.year);
            column.text(ItemKind::Detail(detail.clone()), &detail, DETAIL_SCALE);
            column.gap(ITEM_GAP_EM * 0.5);
        }
    }
    if !resume.certificates.is_empty() {
        column.heading(SectionId::Certificates);
        for item in &resume.certificates {
            column.text(ItemKind::Body(item.name.clone()), &item.name, 1.0);
            column.text(ItemKind::Detail(item.details.clone()), &item.details, DETAIL_SCALE);
            column.gap(ITEM_GAP_EM * 0.5);
        }
    }
    if !resume.skills.is_empty() {
        column.heading(SectionId::Skills);
        let skills = resume.skills.join(" · ");
        column.text(ItemKind::Body(skills.clone()), &skills, 1.0);
    }
    if !resume.languages.is_empty() {
        column.heading(SectionId::Languages);
        let languages = resume.languages.join(" · ");
        column.text(ItemKind::Body(languages.clone()), &languages, 1.0);
    }
}
