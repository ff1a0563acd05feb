//! End-to-end resolution through the public API

use std::sync::Arc;

use konfiggy_core::{
    CodeTagStrategy, ConfigFileGlobalVariableTagStrategy, ConfigurationKeeper, Error, ErrorKind,
    FileConfigurationKeeper, KeyValueCollection, Konfiggy, MemoryConfigurationKeeper, Result,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn konfiggy_with(tag: &str, keeper: MemoryConfigurationKeeper) -> Konfiggy {
    Konfiggy::new()
        .with_tag_strategy(CodeTagStrategy::new(tag))
        .with_configuration_keeper(keeper)
}

#[test]
fn app_setting_for_fixed_tag() {
    let konfiggy = konfiggy_with(
        "Dev",
        MemoryConfigurationKeeper::new().with_app_setting("Dev.Setting", "x"),
    );

    assert_eq!(konfiggy.get_app_setting("Setting").unwrap(), "x");

    let err = konfiggy.get_app_setting("Other").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn connection_string_for_fixed_tag() {
    let konfiggy = konfiggy_with(
        "Dev",
        MemoryConfigurationKeeper::new()
            .with_connection_string("Dev.MyConn", "server=dev-db;database=app"),
    );

    assert_eq!(
        konfiggy.get_connection_string("MyConn").unwrap(),
        "server=dev-db;database=app"
    );
}

#[rstest]
#[case("Local", "Local-environment-specific-value-from-custom-storage")]
#[case("Dev", "Dev-environment-specific-value-from-custom-storage")]
#[case("QA", "QA-environment-specific-value-from-custom-storage")]
#[case("Prod", "Prod-environment-specific-value-from-custom-storage")]
fn custom_source_selects_value_by_tag(#[case] tag: &str, #[case] expected: &str) {
    let custom = |_: &dyn ConfigurationKeeper| -> Result<KeyValueCollection> {
        Ok(["Local", "Dev", "QA", "Prod"]
            .into_iter()
            .map(|env| {
                (
                    format!("{env}.MySetting"),
                    format!("{env}-environment-specific-value-from-custom-storage"),
                )
            })
            .collect())
    };

    let konfiggy = konfiggy_with(tag, MemoryConfigurationKeeper::new());
    assert_eq!(konfiggy.get_custom("MySetting", &custom).unwrap(), expected);
}

#[test]
fn app_settings_and_connection_strings_do_not_mix() {
    let konfiggy = konfiggy_with(
        "Dev",
        MemoryConfigurationKeeper::new().with_connection_string("Dev.OnlyConn", "server=x"),
    );

    let err = konfiggy.get_app_setting("OnlyConn").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn tag_from_host_config_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("app.toml");
    std::fs::write(
        &path,
        r#"
environment_tag = "QA"

[app_settings]
"Dev.Setting" = "dev"
"QA.Setting" = "qa"
"#,
    )
    .unwrap();

    let keeper: Arc<dyn ConfigurationKeeper> = Arc::new(FileConfigurationKeeper::new(&path));
    let konfiggy = Konfiggy::new()
        .with_tag_strategy(ConfigFileGlobalVariableTagStrategy::new(keeper.clone()))
        .with_shared_configuration_keeper(keeper);

    assert_eq!(konfiggy.environment_tag().unwrap(), "QA");
    assert_eq!(konfiggy.get_app_setting("Setting").unwrap(), "qa");
}

#[test]
fn host_config_without_tag_reports_tag_not_found() {
    let keeper: Arc<dyn ConfigurationKeeper> =
        Arc::new(MemoryConfigurationKeeper::new().with_app_setting("Dev.Setting", "x"));
    let konfiggy = Konfiggy::new()
        .with_tag_strategy(ConfigFileGlobalVariableTagStrategy::new(keeper.clone()))
        .with_shared_configuration_keeper(keeper);

    let err = konfiggy.get_app_setting("Setting").unwrap_err();
    assert!(matches!(err, Error::EnvironmentTagNotFound));
}

#[test]
fn missing_host_config_file_surfaces_fs_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let konfiggy = Konfiggy::new()
        .with_tag_strategy(CodeTagStrategy::new("Dev"))
        .with_configuration_keeper(FileConfigurationKeeper::new(temp.path().join("absent.toml")));

    let err = konfiggy.get_app_setting("Setting").unwrap_err();
    assert!(matches!(err, Error::Fs(_)));
    assert_eq!(err.kind(), ErrorKind::External);
}

#[test]
fn read_all_views() {
    let konfiggy = konfiggy_with(
        "Dev",
        MemoryConfigurationKeeper::new()
            .with_app_setting("Dev.A", "1")
            .with_app_setting("QA.A", "2")
            .with_connection_string("Dev.Db", "server=dev")
            .with_connection_string("Prod.Db", "server=prod"),
    );

    assert_eq!(konfiggy.app_settings().unwrap().len(), 2);
    assert_eq!(konfiggy.connection_strings().unwrap().len(), 2);
    assert_eq!(
        konfiggy.environment_connection_strings().unwrap(),
        KeyValueCollection::from([("Db".to_string(), "server=dev".to_string())])
    );
}

#[test]
fn read_all_requires_keeper() {
    let konfiggy = Konfiggy::new().with_tag_strategy(CodeTagStrategy::new("Dev"));
    let err = konfiggy.connection_strings().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
}

#[test]
fn key_containing_separator_is_not_escaped() {
    // "Dev" + "." + "A.B" collides with tag "Dev.A" and key "B"
    let keeper = MemoryConfigurationKeeper::new().with_app_setting("Dev.A.B", "shared");

    let by_key = konfiggy_with("Dev", keeper.clone()).get_app_setting("A.B").unwrap();
    let by_tag = konfiggy_with("Dev.A", keeper).get_app_setting("B").unwrap();

    assert_eq!(by_key, by_tag);
}

proptest! {
    #[test]
    fn qualified_value_is_returned(
        tag in "[A-Za-z][A-Za-z0-9_-]{0,8}",
        key in "[A-Za-z][A-Za-z0-9_-]{0,12}",
        value in "[ -~]{1,24}",
    ) {
        let konfiggy = konfiggy_with(
            &tag,
            MemoryConfigurationKeeper::new().with_app_setting(format!("{tag}.{key}"), value.clone()),
        );
        prop_assert_eq!(konfiggy.get_app_setting(&key).unwrap(), value);
    }

    #[test]
    fn unconfigured_engine_always_reports_configuration_missing(key in "\\PC*") {
        let err = Konfiggy::new().get_app_setting(&key).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    }

    #[test]
    fn empty_value_is_never_returned(tag in "[A-Za-z]{1,8}", key in "[A-Za-z]{1,8}") {
        let konfiggy = konfiggy_with(
            &tag,
            MemoryConfigurationKeeper::new().with_app_setting(format!("{tag}.{key}"), ""),
        );
        let err = konfiggy.get_app_setting(&key).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    }
}
