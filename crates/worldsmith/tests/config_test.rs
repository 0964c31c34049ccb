//! Configuration layering tests.

use std::io::Write;
use std::time::Duration;
use worldsmith::{WorldsmithConfig, WorldsmithErrorKind};

#[test]
fn explicit_file_overrides_bundled_values() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        "[gemini]\ntext_model = \"gemini-test\"\n\n[generation]\nidea_count = 3\nimage_delay_ms = 0"
    )?;

    let config = WorldsmithConfig::from_file(file.path())?;

    assert_eq!(config.gemini().text_model(), "gemini-test");
    assert_eq!(config.gemini().image_model(), "imagen-3.0-generate-002");
    assert_eq!(*config.generation().idea_count(), 3);
    assert_eq!(config.image_delay(), Duration::ZERO);
    Ok(())
}

#[test]
fn missing_explicit_file_is_a_config_error() {
    let err = WorldsmithConfig::from_file("/definitely/not/here/worldsmith.toml").unwrap_err();
    assert!(matches!(err.kind(), WorldsmithErrorKind::Config(_)));
}

#[test]
fn zero_ideas_are_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[generation]\nidea_count = 0")?;

    let err = WorldsmithConfig::from_file(file.path()).unwrap_err();
    assert!(format!("{err}").contains("idea_count"));
    Ok(())
}

#[test]
fn wrong_types_are_reported() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[generation]\nidea_count = \"many\"")?;

    assert!(WorldsmithConfig::from_file(file.path()).is_err());
    Ok(())
}
