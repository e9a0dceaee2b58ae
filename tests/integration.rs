// SPDX-License-Identifier: MPL-2.0
use cvfolio::config::{self, Config};
use cvfolio::content::{LinkLabel, PROJECTS};
use cvfolio::i18n::{dictionary_for, Locale, LocaleState, DEFAULT_LOCALE};
use tempfile::tempdir;

#[test]
fn dictionaries_share_the_same_schema() {
    // The schema is shared by construction (one struct type); the leaf
    // sweep checks the two locales fill every slot of that schema.
    let es = dictionary_for(Locale::Es).leaves();
    let en = dictionary_for(Locale::En).leaves();
    assert_eq!(es.len(), en.len());
    for (es_leaf, en_leaf) in es.iter().zip(en.iter()) {
        assert!(!es_leaf.is_empty());
        assert!(!en_leaf.is_empty());
    }
}

#[test]
fn locale_switch_updates_locale_and_dictionary_atomically() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");

    let mut state = LocaleState::restore_from_path(&settings, None);
    state.set_locale(Locale::En);

    assert_eq!(state.locale(), Locale::En);
    assert!(std::ptr::eq(state.dictionary(), dictionary_for(Locale::En)));
}

#[test]
fn persisted_locale_survives_a_fresh_session() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");

    let mut first_session = LocaleState::restore_from_path(&settings, None);
    first_session.set_locale(Locale::En);
    drop(first_session);

    let second_session = LocaleState::restore_from_path(&settings, None);
    assert_eq!(second_session.locale(), Locale::En);
}

#[test]
fn unrecognized_persisted_value_falls_back_to_default() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    let stored = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&stored, &settings).expect("failed to seed settings file");

    let state = LocaleState::restore_from_path(&settings, None);
    assert_eq!(state.locale(), DEFAULT_LOCALE);
}

#[test]
fn corrupt_settings_file_falls_back_to_default() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "not = valid = toml").expect("failed to write settings file");

    let state = LocaleState::restore_from_path(&settings, None);
    assert_eq!(state.locale(), DEFAULT_LOCALE);
}

#[test]
fn first_session_does_not_create_the_settings_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");

    let state = LocaleState::restore_from_path(&settings, None);
    assert_eq!(state.locale(), DEFAULT_LOCALE);
    assert!(!settings.exists(), "restore must not write the store");
}

#[test]
fn cli_override_beats_persisted_preference() {
    let dir = tempdir().expect("failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    let stored = Config {
        language: Some("es".to_string()),
    };
    config::save_to_path(&stored, &settings).expect("failed to seed settings file");

    let state = LocaleState::restore_from_path(&settings, Some("en"));
    assert_eq!(state.locale(), Locale::En);
}

#[test]
fn project_collection_is_well_formed() {
    assert!(!PROJECTS.is_empty());

    for (i, project) in PROJECTS.iter().enumerate() {
        assert!(!project.id.is_empty());
        for other in &PROJECTS[i + 1..] {
            assert_ne!(project.id, other.id, "duplicate project id");
        }

        for link in project.links {
            assert!(matches!(
                link.label,
                LinkLabel::Demo | LinkLabel::Repository
            ));
        }

        // Every bilingual field resolves to authored text for both locales.
        for field in project.localized_fields() {
            for locale in Locale::ALL {
                assert!(!field.resolve(locale).is_empty());
            }
        }
    }
}
