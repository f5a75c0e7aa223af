// SPDX-License-Identifier: MPL-2.0
use iron_studio::api::{CoachTier, GoalType, MembershipTier, Specialization};
use iron_studio::app::config::{self, Config};
use iron_studio::i18n::fluent::I18n;
use iron_studio::test_utils::{sample_coach, sample_goal, sample_member, InMemoryStudio};
use iron_studio::ui::notifications::{Kind, NotificationCenter};
use iron_studio::ui::theming::ThemeMode;
use iron_studio::ui::{coaches, members};
use std::sync::Arc;
use tempfile::tempdir;

fn english() -> I18n {
    I18n::new(Some("en-US".into()), &Config::default())
}

async fn drive_members(state: &mut members::State, message: members::Message, i18n: &I18n) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        if let Some(effect) = state.update(message, i18n) {
            next = Some(effect.await);
        }
    }
}

async fn drive_coaches(state: &mut coaches::State, message: coaches::Message, i18n: &I18n) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        if let Some(effect) = state.update(message, i18n) {
            next = Some(effect.await);
        }
    }
}

#[tokio::test]
async fn member_lifecycle_reports_each_step() {
    use members::{FormField, Message};

    let studio = Arc::new(InMemoryStudio::new());
    let center = NotificationCenter::new();
    let mut screen = members::State::new(studio.clone(), center.clone());
    let i18n = english();

    screen.update(Message::OpenForm, &i18n);
    for field in [
        FormField::FirstName("Grace".into()),
        FormField::LastName("Hopper".into()),
        FormField::Email("grace@example.com".into()),
    ] {
        screen.update(Message::FormChanged(field), &i18n);
    }
    drive_members(&mut screen, Message::SubmitForm, &i18n).await;

    let shown = center.snapshot();
    assert_eq!(shown.last().map(|n| n.message()), Some("Grace Hopper added."));
    assert!(screen.form().is_none());
    let id = screen
        .members()
        .iter()
        .find(|m| m.email == "grace@example.com")
        .map(|m| m.id)
        .expect("created member is listed after reload");

    drive_members(&mut screen, Message::Delete(id), &i18n).await;

    assert!(screen.members().iter().all(|m| m.id != id));
    let last = center.snapshot().pop().expect("notification");
    assert_eq!(last.kind(), Kind::Success);
    assert_eq!(last.message(), format!("Member #{id} deleted."));
    assert!(screen.runner().error().is_none());
}

#[tokio::test]
async fn no_match_is_a_warning_and_failure_is_an_error() {
    use coaches::Message;

    let studio = Arc::new(InMemoryStudio::new());
    let center = NotificationCenter::new();
    let mut screen = coaches::State::new(studio.clone(), center.clone());
    let i18n = english();

    let mut member = sample_member(0, "Ada", "Lovelace");
    member.membership_tier = MembershipTier::Free;
    member.goals.push(sample_goal(GoalType::BuildMuscle));
    let member_id = studio.insert_member(member);
    let mut vip = sample_coach(0, "Vera", "Vip", &[Specialization::Strength]);
    vip.tier = CoachTier::Vip;
    studio.insert_coach(vip);

    screen.update(Message::MatchInputChanged(member_id.to_string()), &i18n);
    drive_coaches(&mut screen, Message::FindMatch, &i18n).await;

    assert!(screen.runner().last_error().is_none());
    assert!(screen.match_result().is_none());
    let last = center.snapshot().pop().expect("notification");
    assert_eq!(last.kind(), Kind::Warning);
    assert_eq!(last.message(), "No matching coach found.");

    studio.set_offline(true);
    drive_coaches(&mut screen, Message::FindMatch, &i18n).await;

    assert!(screen.runner().last_error().is_some());
    let last = center.snapshot().pop().expect("notification");
    assert_eq!(last.kind(), Kind::Error);
    assert_eq!(last.message(), "connection refused");
}

#[test]
fn config_round_trip_drives_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    french.general.theme_mode = ThemeMode::Dark;
    french.api.base_url = "http://studio.local:9000".to_string();
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, french);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    // The CLI flag wins over the file.
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn broken_config_falls_back_with_warning_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[api\nbase_url = 3")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_WARNING_KEY));
}
