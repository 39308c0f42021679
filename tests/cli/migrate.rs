use anyhow::Result;

use crate::CliTest;

const CONFIG: &str = r#"{
  "basePackage": "com.example.app",
  "roots": [
    {
      "javaDir": "java",
      "manifest": "AndroidManifest.xml",
      "layoutDir": "layout"
    }
  ],
  "packages": {
    "g1": ["A"],
    "g2": ["B"]
  }
}"#;

fn project_with_two_classes() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("repkg.json", CONFIG)?;
    test.write_file(
        "java/A.java",
        "package com.example.app;\n\npublic class A {\n    B b = new B();\n}\n",
    )?;
    test.write_file(
        "java/B.java",
        "package com.example.app;\n\npublic class B {}\n",
    )?;
    test.write_file(
        "AndroidManifest.xml",
        "<manifest>\n  <activity android:name=\".A\" />\n</manifest>\n",
    )?;
    test.write_file(
        "layout/activity_a.xml",
        "<LinearLayout tools:context=\".A\" />\n",
    )?;
    Ok(test)
}

#[test]
fn test_apply_moves_and_injects_imports() -> Result<()> {
    let test = project_with_two_classes()?;

    let output = test.migrate_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert!(!test.exists("java/A.java"));
    assert!(!test.exists("java/B.java"));

    let a = test.read_file("java/g1/A.java")?;
    assert_eq!(
        a,
        "package com.example.app.g1;\n\
         \n\
         import com.example.app.g2.B;\n\
         \n\
         public class A {\n    B b = new B();\n}\n"
    );

    // B never references A, so it gains nothing.
    let b = test.read_file("java/g2/B.java")?;
    assert_eq!(b, "package com.example.app.g2;\n\npublic class B {}\n");

    Ok(())
}

#[test]
fn test_apply_rewrites_manifest_and_layout() -> Result<()> {
    let test = project_with_two_classes()?;

    let output = test.migrate_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let manifest = test.read_file("AndroidManifest.xml")?;
    assert!(manifest.contains(r#"android:name=".g1.A""#));

    let layout = test.read_file("layout/activity_a.xml")?;
    assert!(layout.contains(r#"tools:context=".g1.A""#));

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = project_with_two_classes()?;

    let output = test.migrate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("dry run"));
    assert!(stdout.contains("moved 2 units"));

    assert!(test.exists("java/A.java"));
    assert!(!test.exists("java/g1"));
    let manifest = test.read_file("AndroidManifest.xml")?;
    assert!(manifest.contains(r#"android:name=".A""#));

    Ok(())
}

#[test]
fn test_second_apply_is_noop() -> Result<()> {
    let test = project_with_two_classes()?;

    let first = test.migrate_command().arg("--apply").output()?;
    assert_eq!(first.status.code(), Some(0));
    let a_after_first = test.read_file("java/g1/A.java")?;
    let manifest_after_first = test.read_file("AndroidManifest.xml")?;

    let second = test.migrate_command().arg("--apply").output()?;
    assert_eq!(second.status.code(), Some(0));

    assert_eq!(test.read_file("java/g1/A.java")?, a_after_first);
    assert_eq!(test.read_file("AndroidManifest.xml")?, manifest_after_first);

    let stdout = String::from_utf8(second.stdout)?;
    assert!(stdout.contains("moved 0 units, 2 already in place"));

    Ok(())
}

#[test]
fn test_missing_unit_is_reported_and_skipped() -> Result<()> {
    let test = project_with_two_classes()?;
    std::fs::remove_file(test.root().join("java/B.java"))?;

    let output = test.migrate_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\"B\" not found on disk"));
    assert!(stdout.contains("missing-unit"));

    // A still migrates, and still gains the import for B's future home.
    let a = test.read_file("java/g1/A.java")?;
    assert!(a.contains("import com.example.app.g2.B;"));

    Ok(())
}

#[test]
fn test_missing_artifacts_are_skipped() -> Result<()> {
    let test = project_with_two_classes()?;
    std::fs::remove_file(test.root().join("AndroidManifest.xml"))?;

    let output = test.migrate_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("missing-artifact"));

    Ok(())
}

#[test]
fn test_reference_inside_string_gets_no_import() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("repkg.json", CONFIG)?;
    test.write_file(
        "java/A.java",
        "package com.example.app;\n\npublic class A {\n    String s = \"B\"; // B\n}\n",
    )?;
    test.write_file(
        "java/B.java",
        "package com.example.app;\n\npublic class B {}\n",
    )?;

    let output = test.migrate_command().arg("--apply").output()?;
    assert_eq!(output.status.code(), Some(0));

    let a = test.read_file("java/g1/A.java")?;
    assert!(!a.contains("import"));

    Ok(())
}

#[test]
fn test_missing_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.migrate_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));

    Ok(())
}

#[test]
fn test_duplicate_assignment_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "repkg.json",
        r#"{
  "basePackage": "com.example.app",
  "roots": [{ "javaDir": "java" }],
  "packages": { "g1": ["A"], "g2": ["A"] }
}"#,
    )?;
    test.write_file("java/A.java", "package com.example.app;\nclass A {}\n")?;

    let output = test.migrate_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("assigned to both"));

    Ok(())
}
