use super::super::messages::Message;
use super::super::state::App;
use crate::cache::MemoryPreferences;
use crate::config::{AppConfig, RevealMode, ThemeMode};
use crate::resume::Resume;
use crate::theme::ThemeState;

const SAMPLE: &str = r#"
    clearance = "Public Trust"
    skills = ["Rust", "Go", "Kubernetes"]
    languages = ["English", "Spanish"]

    [personal]
    name = "Sam Lee"
    title = "Platform Engineer"
    about = "Builds reliable systems for people who depend on them every day and sleeps well."

    [[experience]]
    id = "one"
    role = "Lead"
    company = "Acme"
    period = "2020 - Present"
    description = [
        "Ran the platform team across three regions and two clouds",
        "Shipped the deploy pipeline that every service now uses",
    ]

    [[experience]]
    id = "two"
    role = "Engineer"
    company = "Initech"
    period = "2016 - 2020"
    description = ["Kept the lights on for the billing system", "Automated the quarterly audit"]

    [[experience]]
    id = "three"
    role = "Intern"
    company = "Globex"
    period = "2015"
    description = ["Wrote the first integration tests"]
"#;

pub(in crate::app) fn build_test_app(mode: RevealMode, overlay: bool) -> App {
    let resume = Resume::parse(SAMPLE).expect("sample resume");
    let mut config = AppConfig::default();
    config.reveal_mode = mode;
    config.show_start_overlay = overlay;
    config.window_width = 1200.0;
    config.window_height = 848.0;
    config.cache_dir = std::env::temp_dir()
        .join(format!("live-resume-reducer-{}", std::process::id()))
        .display()
        .to_string();
    let theme = ThemeState::load(
        Box::new(MemoryPreferences::default()),
        None,
        ThemeMode::Dark,
    );
    let (app, _task) = App::bootstrap(resume, config, theme);
    app
}

pub(in crate::app) fn scroll_app(app: &mut App, offset_y: f32) {
    let content_height = app.page.content_height();
    app.reduce(Message::Scrolled {
        offset_y,
        viewport_width: 1200.0,
        viewport_height: 800.0,
        content_height,
    });
}

