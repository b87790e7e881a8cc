// tests/integration_tests/config_test.rs
use super::common::{create_config_file, create_test_file};
use anyhow::Result;
use tempfile::TempDir;
use txa::config::{find_config, load_config};
use txa::{Args, Config, OutputFormat, ReportOptions, run_with_writer};

fn render(args: Args) -> Result<String> {
    let mut out = Vec::new();
    run_with_writer(args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_unset_keys_fall_back_to_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // An empty config at the root keeps the walk inside the temp dir.
    let root_config = create_config_file(temp_dir.path(), "")?;
    create_test_file(temp_dir.path(), "deep/er/input.txt", "Hello.")?;
    let nested = temp_dir.path().join("deep/er");

    assert_eq!(find_config(&nested)?, Some(root_config));
    assert_eq!(load_config(&nested)?, Config::default());
    Ok(())
}

#[test]
fn test_config_switches_tables_on() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = create_config_file(
        temp_dir.path(),
        "word_frequencies = true\ncharacter_frequencies = true\ntop = 1\n",
    )?;

    let output = render(Args {
        text: Some("Hello world. Hello again.".to_owned()),
        config: Some(config),
        ..Args::default()
    })?;

    assert!(output.contains("Character frequencies:\nl: 5x\n\n"), "{output}");
    assert!(output.ends_with("Word frequencies:\nhello: 2x\n"), "{output}");
    Ok(())
}

#[test]
fn test_command_line_overrides_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = create_config_file(temp_dir.path(), "format = \"json\"\ntop = 1\n")?;

    let output = render(Args {
        text: Some("b a b c".to_owned()),
        config: Some(config),
        format: Some(OutputFormat::Plain),
        word_frequencies: true,
        top: Some(2),
        ..Args::default()
    })?;

    assert!(output.ends_with("Word frequencies:\nb: 2x\na: 1x\n"), "{output}");
    Ok(())
}

#[test]
fn test_report_options_from_loaded_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "character_frequencies = true\n")?;

    let config = load_config(temp_dir.path())?;
    let options = Args::default().report_options(&config);
    assert_eq!(
        options,
        ReportOptions {
            character_frequencies: true,
            ..ReportOptions::default()
        }
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = create_config_file(temp_dir.path(), "top = -1\n")?;

    let result = render(Args {
        text: Some("text".to_owned()),
        config: Some(config),
        ..Args::default()
    });
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_config_path_must_exist() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let result = render(Args {
        text: Some("text".to_owned()),
        config: Some(missing),
        ..Args::default()
    });
    assert!(result.is_err());
    Ok(())
}
