use anyhow::Result;

use crate::CliTest;

const POT_PATH: &str = "languages/tonepress-ai.pot";
const PO_PATH: &str = "languages/tonepress-ai-fr_FR.po";

fn template() -> String {
    concat!(
        "msgid \"\"\n",
        "msgstr \"\"\n",
        "\"Project-Id-Version: TonePress AI 2.1.0\\n\"\n",
        "\"MIME-Version: 1.0\\n\"\n",
        "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
        "\"Content-Transfer-Encoding: 8bit\\n\"\n",
        "\"POT-Creation-Date: 2026-01-02 03:04+0000\\n\"\n",
        "\"Language: \\n\"\n",
        "\"X-Generator: tonepot\\n\"\n",
        "\n",
        "#: admin.php:10\n",
        "msgid \"Save Settings\"\n",
        "msgstr \"\"\n",
        "\n",
        "#: admin.php:20\n",
        "msgid \"Something custom\"\n",
        "msgstr \"\"\n",
        "\n",
        "#: admin.php:30\n",
        "msgid \"Settings\"\n",
        "msgstr \"Already done\"\n",
        "\n",
    )
    .to_string()
}

#[test]
fn test_round_trip_fills_known_entries() -> Result<()> {
    let test = CliTest::with_file(POT_PATH, &template())?;

    let output = test.translate_command().output()?;
    assert!(output.status.success());

    let po = test.read_file(PO_PATH)?;
    assert!(po.contains("msgid \"Save Settings\"\nmsgstr \"Enregistrer les réglages\"\n"));
    Ok(())
}

#[test]
fn test_unknown_and_translated_entries_are_untouched() -> Result<()> {
    let test = CliTest::with_file(POT_PATH, &template())?;

    assert!(test.translate_command().output()?.status.success());

    let po = test.read_file(PO_PATH)?;
    assert!(po.contains("#: admin.php:20\nmsgid \"Something custom\"\nmsgstr \"\"\n"));
    assert!(po.contains("#: admin.php:30\nmsgid \"Settings\"\nmsgstr \"Already done\"\n"));
    Ok(())
}

#[test]
fn test_language_header_rewritten_once() -> Result<()> {
    let test = CliTest::with_file(POT_PATH, &template())?;

    assert!(test.translate_command().output()?.status.success());

    let po = test.read_file(PO_PATH)?;
    assert!(po.contains("\"Language: fr_FR\\n\"\n"));
    assert!(!po.contains("\"Language: \\n\""));
    // The rest of the header is byte-identical.
    assert!(po.contains("\"POT-Creation-Date: 2026-01-02 03:04+0000\\n\"\n"));
    Ok(())
}

#[test]
fn test_compiler_failure_is_downgraded_to_warning() -> Result<()> {
    let test = CliTest::with_file(POT_PATH, &template())?;

    // env_clear() leaves no PATH, so msgfmt cannot be found; the run must
    // still succeed because the PO file was written.
    let output = test.translate_command().output()?;
    assert!(output.status.success());
    assert!(test.root().join(PO_PATH).exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("msgfmt"));
    Ok(())
}

#[test]
fn test_missing_template_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.translate_command().output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("tonepress-ai.pot"));
    Ok(())
}

#[test]
fn test_template_flag_overrides_default_path() -> Result<()> {
    let test = CliTest::with_file("custom/template.pot", &template())?;

    let output = test
        .translate_command()
        .args(["--template", "custom/template.pot"])
        .output()?;
    assert!(output.status.success());

    let po = test.read_file(PO_PATH)?;
    assert!(po.contains("Enregistrer les réglages"));
    Ok(())
}

#[test]
fn test_extract_then_translate_pipeline() -> Result<()> {
    let test = CliTest::with_file(
        "includes/admin.php",
        "<?php\n_e('History', 'tonepress-ai');\n__('Bespoke label', 'tonepress-ai');\n",
    )?;

    assert!(test.extract_command().output()?.status.success());
    assert!(test.translate_command().output()?.status.success());

    let po = test.read_file(PO_PATH)?;
    assert!(po.contains("#: includes/admin.php:2\nmsgid \"History\"\nmsgstr \"Historique\"\n"));
    assert!(po.contains("msgid \"Bespoke label\"\nmsgstr \"\"\n"));
    assert!(po.contains("\"Language: fr_FR\\n\"\n"));
    Ok(())
}

#[test]
fn test_reports_translated_entry_count() -> Result<()> {
    let test = CliTest::with_file(POT_PATH, &template())?;

    let output = test.translate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Applying translations..."));
    assert!(stdout.contains("Translated 1 entries."));
    Ok(())
}
