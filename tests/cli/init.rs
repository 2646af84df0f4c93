use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert!(output.status.success());

    let config = test.read_file(".tonepotrc.json")?;
    assert!(config.contains("\"textDomain\": \"tonepress-ai\""));
    assert!(config.contains("\"languagesDir\": \"languages\""));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created .tonepotrc.json"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tonepotrc.json", "{}")?;

    let output = test.init_command().output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    Ok(())
}
