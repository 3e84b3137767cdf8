//! End-to-end flows through the reading session
//!
//! These tests drive the store and panel together the way the desktop
//! shell does:
//! - Opening and seeding the draft
//! - Submitting and resetting
//! - Outside-press dismissal
//! - Listener lifetime

use lector_core::{
    BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, ListenerRegistry,
    PanelLayout, PanelMessage, Point, PresentationSettings, ReadingSession, SessionEvent,
    SettingChange,
};

const OUTSIDE: Point = Point { x: 1000.0, y: 400.0 };
const INSIDE: Point = Point { x: 200.0, y: 300.0 };

fn open_session(settings: PresentationSettings) -> ReadingSession {
    let mut session = ReadingSession::new(settings);
    session.resize(1200.0, 800.0);
    session.handle(PanelMessage::Toggle);
    session
}

#[test]
fn test_open_seeds_draft_with_applied_settings() {
    let applied = PresentationSettings {
        font_family: FontFamily::Merriweather,
        font_size: FontSize::ExtraLarge,
        font_color: FontColor::VIOLET,
        background_color: BackgroundColor::PINK,
        content_width: ContentWidth::Narrow,
    };
    let session = open_session(applied);

    assert_eq!(session.panel().draft(), Some(&applied));
}

#[test]
fn test_reopen_reseeds_from_store_not_old_draft() {
    let mut session = open_session(PresentationSettings::default());
    session.handle(PanelMessage::FieldChanged(SettingChange::FontColor(
        FontColor::HOT_PINK,
    )));
    session.handle(PanelMessage::Toggle);
    session.handle(PanelMessage::Toggle);

    assert_eq!(
        session.panel().draft(),
        Some(&PresentationSettings::default())
    );
}

#[test]
fn test_outside_press_discards_font_size_change() {
    let mut session = open_session(PresentationSettings::default());
    assert_eq!(session.store().settings().font_size.px(), 18.0);

    session.handle(PanelMessage::FieldChanged(SettingChange::FontSize(
        FontSize::Large,
    )));
    let event = session.handle(PanelMessage::PointerPressed(OUTSIDE));

    assert_eq!(event, SessionEvent::VisibilityChanged);
    assert!(!session.store().is_panel_open());
    assert_eq!(session.store().settings().font_size, FontSize::Regular);
}

#[test]
fn test_inside_press_keeps_panel_open() {
    let mut session = open_session(PresentationSettings::default());
    let toggle = PanelLayout::for_viewport(1200.0, 800.0).toggle;

    assert_eq!(
        session.handle(PanelMessage::PointerPressed(INSIDE)),
        SessionEvent::Unchanged
    );
    assert_eq!(
        session.handle(PanelMessage::PointerPressed(Point::new(
            toggle.x + toggle.width / 2.0,
            toggle.y + toggle.height / 2.0,
        ))),
        SessionEvent::Unchanged
    );
    assert!(session.panel().is_open());
}

#[test]
fn test_submit_background_color_only() {
    let before = PresentationSettings {
        font_size: FontSize::Large,
        ..PresentationSettings::default()
    };
    let mut session = open_session(before);

    session.handle(PanelMessage::FieldChanged(SettingChange::BackgroundColor(
        BackgroundColor::SKY_BLUE,
    )));
    let event = session.handle(PanelMessage::Submit);

    assert_eq!(event, SessionEvent::SettingsChanged);
    assert!(!session.store().is_panel_open());
    let applied = session.store().settings();
    assert_eq!(applied.background_color, BackgroundColor::SKY_BLUE);
    assert_eq!(
        PresentationSettings {
            background_color: before.background_color,
            ..applied
        },
        before
    );
}

#[test]
fn test_submit_commits_draft_at_submit_time() {
    let mut session = open_session(PresentationSettings::default());
    session.handle(PanelMessage::FieldChanged(SettingChange::FontFamily(
        FontFamily::DaysOne,
    )));
    session.handle(PanelMessage::FieldChanged(SettingChange::FontFamily(
        FontFamily::Ubuntu,
    )));
    session.handle(PanelMessage::Submit);

    assert_eq!(session.store().settings().font_family, FontFamily::Ubuntu);
}

#[test]
fn test_reset_after_three_changes() {
    let start = PresentationSettings {
        content_width: ContentWidth::Narrow,
        ..PresentationSettings::default()
    };
    let mut session = open_session(start);

    session.handle(PanelMessage::FieldChanged(SettingChange::FontSize(
        FontSize::ExtraLarge,
    )));
    session.handle(PanelMessage::FieldChanged(SettingChange::FontColor(
        FontColor::GRAY,
    )));
    session.handle(PanelMessage::FieldChanged(SettingChange::FontFamily(
        FontFamily::CormorantGaramond,
    )));
    let event = session.handle(PanelMessage::Reset);

    assert_eq!(event, SessionEvent::SettingsChanged);
    assert_eq!(session.store().settings(), PresentationSettings::default());
    assert!(!session.store().is_panel_open());
    assert!(!session.panel().is_open());
}

#[test]
fn test_escape_dismisses_without_applying() {
    let mut session = open_session(PresentationSettings::default());
    session.handle(PanelMessage::FieldChanged(SettingChange::ContentWidth(
        ContentWidth::Narrow,
    )));
    session.handle(PanelMessage::Dismiss);

    assert!(!session.store().is_panel_open());
    assert_eq!(session.store().settings().content_width, ContentWidth::Wide);
}

#[test]
fn test_listener_released_on_every_exit_path() {
    let registry = ListenerRegistry::new();
    let mut session =
        ReadingSession::with_registry(PresentationSettings::default(), registry.clone());
    session.resize(1200.0, 800.0);

    let exits = [
        PanelMessage::Toggle,
        PanelMessage::Submit,
        PanelMessage::Reset,
        PanelMessage::PointerPressed(OUTSIDE),
        PanelMessage::Dismiss,
    ];
    for exit in exits {
        session.handle(PanelMessage::Toggle);
        assert_eq!(registry.active(), 1, "listener missing before {:?}", exit);
        session.handle(exit);
        assert_eq!(registry.active(), 0, "listener leaked after {:?}", exit);
    }

    // Teardown while open
    session.handle(PanelMessage::Toggle);
    assert_eq!(registry.active(), 1);
    drop(session);
    assert_eq!(registry.active(), 0);
}
