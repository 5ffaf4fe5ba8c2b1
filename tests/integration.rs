// SPDX-License-Identifier: MPL-2.0
use cat_gallery::api::{CatImage, Favourite, FavouriteId, ImageId};
use cat_gallery::config::{self, Config, DEFAULT_IMAGE_LIMIT};
use cat_gallery::gallery::{GalleryController, InfoEntry, RequestTicket, ViewMode};
use cat_gallery::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("window-title"), i18n_en.tr("window-title"));
}

#[test]
fn settings_file_in_override_dir_is_picked_up() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[api]\nimage_limit = 12\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.api.image_limit, 12);
    assert_ne!(loaded.api.image_limit, DEFAULT_IMAGE_LIMIT);
    assert!(loaded.general.theme_mode.is_dark());
}

#[test]
fn api_key_never_defaults_to_a_compiled_value() {
    let config = Config::default();
    assert!(config.api.api_key.is_none());
    let serialized = toml::to_string(&config).expect("serialize");
    assert!(!serialized.contains("api_key"));
}

#[test]
fn image_fixture_without_breeds_yields_placeholder_entry() {
    let images: Vec<CatImage> = serde_json::from_str(
        r#"[
            {"id":"a1","url":"https://cdn.example.com/a1.jpg","width":800,"height":600,
             "breeds":[{"id":"abys","name":"Abyssinian","temperament":"Active, Energetic",
                        "origin":"Egypt","description":"Playful"}]},
            {"id":"a2","url":"https://cdn.example.com/a2.jpg","breeds":[]}
        ]"#,
    )
    .expect("fixture parses");

    let entries: Vec<InfoEntry> = images.iter().map(InfoEntry::from_image).collect();

    assert_eq!(entries[0].name, "Abyssinian");
    assert_eq!(entries[0].origin.as_deref(), Some("Egypt"));
    assert!(!entries[0].is_placeholder);
    assert!(entries[1].is_placeholder);
    assert!(entries[1].name.is_empty());
}

#[test]
fn favourites_fixture_drives_the_favourites_view() {
    let favourites: Vec<Favourite> = serde_json::from_str(
        r#"[
            {"id":232413577,"user_id":"u1","image_id":"a1","sub_id":null,
             "created_at":"2023-10-01T00:00:00.000Z",
             "image":{"id":"a1","url":"https://cdn.example.com/a1.jpg"}},
            {"id":"232413578","image_id":"gone","image":{}}
        ]"#,
    )
    .expect("fixture parses");
    assert_eq!(favourites[0].id, FavouriteId::new("232413577"));

    let mut gallery = GalleryController::new(5);
    let ticket: RequestTicket = gallery.begin_favourites();
    let loads = gallery.finish_favourites(ticket, Ok(favourites));

    assert_eq!(gallery.mode(), &ViewMode::Favourites);
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].url, "https://cdn.example.com/a1.jpg");
    assert_eq!(gallery.carousel().len(), 1);
    assert_eq!(
        gallery.carousel().items()[0].image_id(),
        Some(&ImageId::new("a1"))
    );
    assert!(gallery.info_panel().is_empty());
    assert!(!gallery.progress().is_busy());
    assert_eq!(gallery.progress().percent(), 100);
}
