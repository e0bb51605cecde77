use super::messages::Message;
use super::state::{
    App, COLUMN_GAP_PX, DETAIL_SCALE, ENTRY_SCALE, HEADING_SCALE, HEADLINE_SCALE, ItemKind,
    NAME_SCALE, PAGE_SCROLL_ID, SectionId, TOOLBAR_HEIGHT_PX,
};
use crate::resume::ABOUT_BLOCK_ID;
use crate::reveal::revealed_word_count;
use crate::theme::Palette;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::text::{LineHeight, Rich, Span, Wrapping};
use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_space, row, scrollable, text,
};
use iced::{Background, Color, Element, Font, Length, Theme};
use std::time::Instant;

const HEADLINE_FROM: Color = Color::from_rgb(0.66, 0.33, 0.97);
const HEADLINE_TO: Color = Color::from_rgb(0.98, 0.45, 0.09);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.theme.palette();
        let body: Element<'_, Message> = if self.ui.overlay_visible {
            self.start_overlay(palette)
        } else {
            self.page_view(palette)
        };

        let content = column![self.toolbar(palette), body].height(Length::Fill);
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(palette.paper)),
                text_color: Some(palette.text),
                ..container::Style::default()
            })
            .into()
    }

    fn toolbar(&self, palette: Palette) -> Element<'_, Message> {
        let theme_label = if self.theme.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        };
        let auto_label = if self.ui.pending_launch_at.is_some() {
            "Starting..."
        } else if self.scroller.is_running() {
            "Pause"
        } else {
            "Play"
        };
        let print_button = if self.ui.printing {
            toolbar_button("Print")
        } else {
            toolbar_button("Print").on_press(Message::Print)
        };

        let mut controls: Row<'_, Message> = row![
            toolbar_button(theme_label).on_press(Message::ToggleTheme),
            toolbar_button(auto_label).on_press(Message::ToggleAutoScroll),
            print_button,
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        if !self.ui.overlay_visible {
            controls = controls.push(Space::with_width(Length::Fixed(12.0)));
            controls = controls.push(
                toolbar_button(SectionId::Home.label())
                    .on_press(Message::JumpToSection(SectionId::Home)),
            );
            for section in SectionId::NAVIGABLE {
                if self.page.section_top(section).is_some() {
                    controls = controls.push(
                        toolbar_button(section.label()).on_press(Message::JumpToSection(section)),
                    );
                }
            }
        }

        controls = controls.push(horizontal_space());
        if let Some(status) = &self.ui.status {
            controls = controls.push(text(status.as_str()).size(13).color(palette.muted));
        }

        container(controls)
            .height(Length::Fixed(TOOLBAR_HEIGHT_PX))
            .width(Length::Fill)
            .padding([8, 16])
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(palette.panel)),
                ..container::Style::default()
            })
            .into()
    }

    fn start_overlay(&self, palette: Palette) -> Element<'_, Message> {
        let panel = column![
            text("SYSTEM INITIALIZED")
                .font(Font::MONOSPACE)
                .size(28)
                .color(palette.accent),
            text(self.resume.personal.name.to_uppercase())
                .size(16)
                .color(palette.muted),
            button(text("Launch Experience").size(18))
                .padding([10, 24])
                .on_press(Message::LaunchPresentation),
        ]
        .spacing(18)
        .align_x(Horizontal::Center);

        container(panel).center(Length::Fill).into()
    }

    fn page_view(&self, palette: Palette) -> Element<'_, Message> {
        let now = Instant::now();
        let columns: Vec<Element<'_, Message>> = self
            .page
            .columns()
            .iter()
            .map(|page_column| {
                let items: Vec<Element<'_, Message>> = page_column
                    .items
                    .iter()
                    .map(|item| {
                        container(self.page_item(&item.kind, palette, now))
                            .width(Length::Fill)
                            .height(Length::Fixed(item.height))
                            .clip(true)
                            .into()
                    })
                    .collect();
                let background = if page_column.sidebar {
                    Some(Background::Color(palette.panel))
                } else {
                    None
                };
                container(Column::with_children(items).width(Length::Fill))
                    .width(Length::FillPortion(page_column.portion))
                    .style(move |_theme: &Theme| container::Style {
                        background,
                        ..container::Style::default()
                    })
                    .into()
            })
            .collect();

        let gap = if self.page.is_single_column() {
            0.0
        } else {
            COLUMN_GAP_PX
        };
        let sheet = container(
            Row::with_children(columns)
                .spacing(gap)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .padding([self.config.margin_vertical, self.config.margin_horizontal]);

        scrollable(sheet)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn page_item<'a>(
        &'a self,
        kind: &'a ItemKind,
        palette: Palette,
        now: Instant,
    ) -> Element<'a, Message> {
        let size = self.config.font_size as f32;
        let line_height = LineHeight::Relative(self.config.line_spacing);
        let bold = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };

        match kind {
            ItemKind::Name => text(self.resume.personal.name.to_uppercase())
                .size(size * NAME_SCALE)
                .line_height(line_height)
                .font(bold)
                .into(),
            ItemKind::Headline => {
                let blend = self.title.blend(now);
                text(self.title.frame_at(now))
                    .size(size * HEADLINE_SCALE)
                    .line_height(line_height)
                    .font(Font::MONOSPACE)
                    .color(mix(HEADLINE_FROM, HEADLINE_TO, blend))
                    .into()
            }
            ItemKind::Detail(detail) => text(detail.as_str())
                .size(size * DETAIL_SCALE)
                .line_height(line_height)
                .color(palette.muted)
                .into(),
            ItemKind::Heading(section) => text(section.label().to_uppercase())
                .size(size * HEADING_SCALE)
                .line_height(line_height)
                .font(bold)
                .color(palette.accent)
                .into(),
            ItemKind::Body(body) => text(body.as_str())
                .size(size)
                .line_height(line_height)
                .wrapping(Wrapping::Word)
                .into(),
            ItemKind::EntryTitle(job_index) => {
                let Some(job) = self.resume.experience.get(*job_index) else {
                    return Space::with_height(Length::Shrink).into();
                };
                let color = if job.is_future {
                    palette.future
                } else {
                    palette.text
                };
                text(format!("{} | {}", job.role, job.company))
                    .size(size * ENTRY_SCALE)
                    .line_height(line_height)
                    .font(bold)
                    .color(color)
                    .into()
            }
            ItemKind::Reveal(index) => self.reveal_block(*index, palette),
            ItemKind::Gap => Space::with_height(Length::Fill).into(),
        }
    }

    /// Words past the block's progress render dimmed.
    fn reveal_block(&self, index: usize, palette: Palette) -> Element<'_, Message> {
        let Some(block) = self.blocks.get(index) else {
            return Space::with_height(Length::Shrink).into();
        };
        let revealed = revealed_word_count(self.block_progress(index), block.word_count());
        let size = self.config.font_size as f32;
        let line_height = LineHeight::Relative(self.config.line_spacing);
        let dim = Color {
            a: self.config.dim_alpha,
            ..palette.text
        };
        let bulleted = block.id() != ABOUT_BLOCK_ID;
        let indent = self.page_style().bullet_indent();

        let mut word_index = 0usize;
        let mut lines: Vec<Element<'_, Message>> = Vec::with_capacity(block.lines().len());
        for line in block.lines() {
            let spans: Vec<Span<'_, Message>> = line
                .iter()
                .map(|word| {
                    let color = if word_index < revealed {
                        palette.text
                    } else {
                        dim
                    };
                    word_index += 1;
                    Span::new(format!("{word} "))
                        .size(size)
                        .line_height(line_height)
                        .color(color)
                })
                .collect();
            let rich: Rich<'_, Message> = Rich::with_spans(spans);
            let rich = rich.width(Length::Fill).wrapping(Wrapping::Word);

            if bulleted {
                lines.push(
                    row![
                        text("•")
                            .size(size)
                            .line_height(line_height)
                            .color(palette.accent)
                            .width(Length::Fixed(indent)),
                        rich
                    ]
                    .into(),
                );
            } else {
                lines.push(rich.into());
            }
        }

        Column::with_children(lines).width(Length::Fill).into()
    }
}

fn toolbar_button(label: &str) -> button::Button<'_, Message> {
    button(text(label).size(14)).padding([4, 10])
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}
