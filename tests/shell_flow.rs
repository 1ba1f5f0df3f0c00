//! End-to-end tests driving the shell with in-memory hosts.
//!
//! Each test starts a shell at some page address, feeds it events the way
//! the headless binary does, and checks the address bar, the player and the
//! rendered page.

use futures::executor::block_on;
use ministream::app::{AppState, DisplayMode, Event, Theme, INVALID_INPUT_MESSAGE};
use ministream::infrastructure::{Location, PageUrl};
use ministream::player::{LoadState, RenderPlan, ScriptLoader};
use ministream::shell::headless::{HeadlessContainer, HeadlessInjector};
use ministream::shell::Shell;
use ministream::{initialize, Config, ContentKind};

type TestShell = Shell<PageUrl, HeadlessInjector, HeadlessContainer>;

/// Test helper building a started shell at `address`
fn started(address: &str) -> TestShell {
    started_with(address, true, HeadlessContainer::default())
}

fn started_with(address: &str, script_available: bool, container: HeadlessContainer) -> TestShell {
    let page = PageUrl::parse(address).unwrap();
    let loader = ScriptLoader::new(
        HeadlessInjector::new(script_available),
        "https://embed.test/embed/v1.js",
    );
    let mut shell = Shell::new(AppState::default(), page, loader, container);
    shell.start().unwrap();
    block_on(shell.settle_pending());
    shell
}

fn submit(shell: &mut TestShell, input: &str) {
    shell.dispatch(&Event::InputChanged).unwrap();
    shell.dispatch(&Event::Submit(input.to_string())).unwrap();
    block_on(shell.settle_pending());
}

#[test]
fn test_submissions_reflect_into_address_bar() {
    let mut shell = started("https://watch.example.com/");

    let cases = [
        ("someuser", "https://watch.example.com/?channel=someuser"),
        ("https://twitch.tv/videos/12345", "https://watch.example.com/?video=12345"),
        ("https://twitch.tv/videos/v12345", "https://watch.example.com/?video=12345"),
        ("https://twitch.tv/someuser/clip/AbCdEf", "https://watch.example.com/?clip=AbCdEf"),
        ("https://clips.twitch.tv/AbCdEf", "https://watch.example.com/?clip=AbCdEf"),
        ("https://twitch.tv/someuser", "https://watch.example.com/?channel=someuser"),
    ];

    for (input, expected) in cases {
        submit(&mut shell, input);
        assert_eq!(shell.page().href(), expected, "input {input:?}");
        assert!(shell.state().error_message.is_none());
    }
}

#[test]
fn test_invalid_submission_shows_error_and_clears_player() {
    let mut shell = started("https://watch.example.com/app?channel=someone");
    submit(&mut shell, "not a url!! ");

    assert_eq!(shell.page().href(), "https://watch.example.com/app");
    assert!(shell.state().reference.is_none());
    assert_eq!(shell.state().error_message.as_deref(), Some(INVALID_INPUT_MESSAGE));
    assert_eq!(shell.adapter().plan(), &RenderPlan::Nothing);

    let markup = shell.render();
    assert!(markup.contains("Invalid Twitch URL."));
    assert!(!markup.contains("<iframe"));

    shell.dispatch(&Event::InputChanged).unwrap();
    assert!(shell.state().error_message.is_none());
}

#[test]
fn test_clearing_input_is_not_an_error() {
    let mut shell = started("https://watch.example.com/?clip=Slug");
    submit(&mut shell, "   ");

    assert_eq!(shell.page().href(), "https://watch.example.com/");
    assert!(shell.state().reference.is_none());
    assert!(shell.state().error_message.is_none());
}

#[test]
fn test_repeated_submission_is_stable() {
    let mut shell = started("https://watch.example.com/");
    submit(&mut shell, "twitch.tv/someuser");
    let first = (shell.state().clone(), shell.page().href().to_string());

    submit(&mut shell, "twitch.tv/someuser");
    assert_eq!(shell.state(), &first.0);
    assert_eq!(shell.page().href(), first.1);
    assert_eq!(shell.page().replacements(), 2);
}

#[test]
fn test_startup_query_survives_untouched() {
    let shell = started("https://watch.example.com/?video=999&utm=x");

    assert_eq!(shell.page().href(), "https://watch.example.com/?video=999&utm=x");
    let reference = shell.state().reference.as_ref().unwrap();
    assert_eq!(reference.kind(), ContentKind::Video);
    assert_eq!(reference.id(), "999");
    assert!(shell
        .render()
        .contains("https://player.twitch.tv/?video=v999&amp;parent=watch.example.com"));
}

#[test]
fn test_startup_priority_prefers_channel() {
    let shell = started("https://watch.example.com/?clip=Slug&video=1&channel=first");
    let reference = shell.state().reference.as_ref().unwrap();
    assert_eq!(reference.query_pair(), ("channel", "first"));
}

#[test]
fn test_mode_toggle_ignored_for_vods_and_clips() {
    for address in [
        "https://watch.example.com/?video=999",
        "https://watch.example.com/?clip=Slug",
    ] {
        let mut shell = started(address);
        let before = shell.state().clone();
        let rendered = shell.dispatch(&Event::ToggleDisplayMode).unwrap();

        assert!(!rendered);
        assert_eq!(shell.state(), &before);
        assert!(shell.render().contains("Chat is only available for live channels"));
    }
}

#[test]
fn test_full_channel_embed_lifecycle() {
    let mut shell = started("https://watch.example.com/?channel=someone");
    shell.dispatch(&Event::ToggleDisplayMode).unwrap();
    assert_eq!(shell.state().display_mode, DisplayMode::Full);
    assert_eq!(block_on(shell.settle_pending()), 1);

    let mounted = shell.adapter().container().mounted().unwrap();
    assert_eq!(mounted.channel.as_deref(), Some("someone"));
    assert_eq!(mounted.parent, vec!["watch.example.com".to_string()]);
    assert_eq!(mounted.theme, Theme::Light);

    shell.dispatch(&Event::ToggleTheme).unwrap();
    assert_eq!(shell.document_theme(), Some(Theme::Dark));
    assert_eq!(shell.adapter().container().attached(), 0);
    block_on(shell.settle_pending());
    assert_eq!(shell.adapter().container().mounted().unwrap().theme, Theme::Dark);

    submit(&mut shell, "https://twitch.tv/videos/v42");
    let mounted = shell.adapter().container().mounted().unwrap();
    assert_eq!(mounted.video.as_deref(), Some("42"));
    assert!(mounted.channel.is_none());
    assert_eq!(shell.loader().injector().injections(), 1);

    submit(&mut shell, "");
    assert_eq!(shell.adapter().container().attached(), 0);
    assert!(shell.adapter().handle().is_none());
}

#[test]
fn test_clip_in_full_mode_uses_iframe() {
    let mut shell = started("https://watch.example.com/?channel=someone");
    shell.dispatch(&Event::ToggleDisplayMode).unwrap();
    submit(&mut shell, "clips.twitch.tv/Slug");

    assert_eq!(shell.adapter().container().attached(), 0);
    assert!(shell
        .render()
        .contains("https://clips.twitch.tv/embed?clip=Slug&amp;parent=watch.example.com&amp;autoplay=true"));
}

#[test]
fn test_unavailable_script_keeps_running() {
    let mut shell = started_with(
        "https://watch.example.com/?channel=someone",
        false,
        HeadlessContainer::default(),
    );
    shell.dispatch(&Event::ToggleDisplayMode).unwrap();
    assert_eq!(block_on(shell.settle_pending()), 0);
    assert_eq!(shell.loader().state(), LoadState::Failed);

    shell.dispatch(&Event::ToggleTheme).unwrap();
    assert_eq!(block_on(shell.settle_pending()), 0);
    assert_eq!(shell.loader().injector().injections(), 1);

    submit(&mut shell, "someuser");
    assert_eq!(shell.page().href(), "https://watch.example.com/?channel=someuser");
}

#[test]
fn test_refused_mount_leaves_container_empty() {
    let mut shell = started_with(
        "https://watch.example.com/?channel=someone",
        true,
        HeadlessContainer::refusing(),
    );
    shell.dispatch(&Event::ToggleDisplayMode).unwrap();
    assert_eq!(block_on(shell.settle_pending()), 0);
    assert_eq!(shell.loader().state(), LoadState::Ready);
    assert!(shell.adapter().handle().is_none());
}

#[test]
fn submit_on_double_slash_path_stays_on_origin() {
    let mut shell = started("https://watch.example.com//evil.test/x");
    submit(&mut shell, "someuser");

    assert_eq!(shell.page().hostname(), "watch.example.com");
    assert_eq!(shell.page().pathname(), "//evil.test/x");
    assert_eq!(
        shell.page().href(),
        "https://watch.example.com//evil.test/x?channel=someuser"
    );
}

#[test]
fn test_config_seeds_initial_state() {
    let config = Config {
        theme: Theme::Dark,
        display_mode: DisplayMode::Full,
        ..Config::default()
    };
    let page = PageUrl::parse("https://watch.example.com/?channel=someone").unwrap();
    let loader = ScriptLoader::new(HeadlessInjector::new(true), config.script_url.clone());
    let mut shell = Shell::new(initialize(&config), page, loader, HeadlessContainer::default());

    shell.start().unwrap();
    assert_eq!(shell.document_theme(), Some(Theme::Dark));
    assert_eq!(block_on(shell.settle_pending()), 1);
    assert!(shell.render().starts_with("<div class=\"dark\">"));
}
