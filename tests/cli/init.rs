use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Created repkg.json"));

    let config = test.read_file("repkg.json")?;
    assert!(config.contains("\"basePackage\""));
    assert!(config.contains("\"packages\""));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("repkg.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"));

    assert_eq!(test.read_file("repkg.json")?, "{}");

    Ok(())
}
