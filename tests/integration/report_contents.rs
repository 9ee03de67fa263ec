use std::fs;

use anyhow::Result;
use chrono::{Local, TimeZone};
use tempfile::tempdir;

use sisc_preflight::{
    checklist::SISC_SESAU,
    report::{build_report, TERMINAL_TAIL_LINES},
};

fn fixed_timestamp() -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
        .single()
        .expect("fixed timestamp is unambiguous")
}

#[test]
fn report_opens_with_the_dated_header() -> Result<()> {
    let project = tempdir()?;
    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());

    let text = doc.to_text();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("=".repeat(80).as_str()));
    assert_eq!(lines.next(), Some("VERIFICATION REPORT - SISC-SESAU"));
    assert_eq!(lines.next(), Some("=".repeat(80).as_str()));
    assert_eq!(lines.next(), Some("Checked at: 2025-01-02 03:04:05"));
    assert_eq!(lines.next(), Some(""));
    Ok(())
}

#[test]
fn dev_dependency_manifest_draws_the_attention_note() -> Result<()> {
    let project = tempdir()?;
    fs::write(
        project.path().join("package.json"),
        "{\n  \"devDependencies\": {\n    \"prisma\": \"^5.10.0\"\n  }\n}\n",
    )?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let text = doc.to_text();
    assert!(text.contains("[ATTENTION] prisma may be declared in devDependencies (VERIFY)"));
    assert!(!text.contains("(CORRECT)"));
    Ok(())
}

#[test]
fn manifest_without_prisma_gets_no_dependency_note() -> Result<()> {
    let project = tempdir()?;
    fs::write(
        project.path().join("package.json"),
        "{\n  \"dependencies\": {\n    \"next\": \"14.2.3\"\n  }\n}\n",
    )?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let text = doc.to_text();
    assert!(!text.contains("(CORRECT)"));
    assert!(!text.contains("[ATTENTION]"));
    Ok(())
}

#[test]
fn path_alias_tsconfig_draws_the_info_note() -> Result<()> {
    let project = tempdir()?;
    fs::write(
        project.path().join("tsconfig.json"),
        "{\n  \"compilerOptions\": {\n    \"paths\": { \"@/*\": [\"./*\"] }\n  }\n}\n",
    )?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let text = doc.to_text();
    assert!(text.contains("[INFO] Path alias configuration is correct"));
    Ok(())
}

#[test]
fn tsconfig_without_the_alias_gets_no_note() -> Result<()> {
    let project = tempdir()?;
    fs::write(
        project.path().join("tsconfig.json"),
        "{\n  \"compilerOptions\": {\n    \"paths\": { \"@/*\": [\"./src/*\"] }\n  }\n}\n",
    )?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let text = doc.to_text();
    assert!(text.contains("[OK] FILE FOUND: tsconfig.json"));
    assert!(!text.contains("[INFO] Path alias configuration is correct"));
    Ok(())
}

#[test]
fn overlong_sample_lines_are_clipped_at_one_hundred_characters() -> Result<()> {
    let project = tempdir()?;
    fs::write(project.path().join("vercel.json"), "x".repeat(150))?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let expected = format!("     1: {}...", "x".repeat(100));
    assert!(
        doc.to_text().lines().any(|line| line == expected),
        "clipped sample line not found"
    );
    Ok(())
}

#[test]
fn terminal_tail_matches_the_end_of_the_saved_text() -> Result<()> {
    let project = tempdir()?;
    fs::write(project.path().join("package.json"), "{}")?;

    let (doc, _) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    let text = doc.to_text();
    let last_lines: Vec<&str> = text
        .lines()
        .rev()
        .take(TERMINAL_TAIL_LINES)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    assert_eq!(doc.tail(TERMINAL_TAIL_LINES), last_lines);
    Ok(())
}

#[test]
fn counts_in_the_summary_track_the_scan() -> Result<()> {
    let project = tempdir()?;
    fs::write(project.path().join("package.json"), "{}")?;
    fs::write(project.path().join("tsconfig.json"), "{}")?;
    fs::write(project.path().join("middleware.ts"), "export {}\n")?;

    let (doc, summary) = build_report(&SISC_SESAU, project.path(), fixed_timestamp());
    assert_eq!(summary.total, 15);
    assert_eq!(summary.found, 3);
    assert_eq!(summary.missing, 12);

    let text = doc.to_text();
    assert!(text.contains("Total files checked: 15"));
    assert!(text.contains("[OK] Found: 3"));
    assert!(text.contains("[MISSING] Missing: 12"));
    assert!(text.contains("Completeness: 20.0%"));
    Ok(())
}
