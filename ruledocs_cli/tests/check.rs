use ruledocs_core::AnyEmptyResult;
use similar_asserts::assert_eq;

mod common;

use common::*;

#[test]
fn check_fails_for_stale_pages() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	setup_project(tmp.path())?;

	ruledocs_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("`vue/html-indent` at docs/rules/html-indent.md"))
		.stderr(predicates::str::contains("2 rule page(s) are out of date"));

	// Check must not modify files.
	let content = std::fs::read_to_string(tmp.path().join("docs/rules/html-indent.md"))?;
	assert_eq!(content, INDENT_DOC);

	Ok(())
}

#[test]
fn check_passes_after_update() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	setup_project(tmp.path())?;

	ruledocs_cmd().arg("--path").arg(tmp.path()).assert().success();

	ruledocs_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("all 2 rule page(s) are up to date"));

	Ok(())
}

#[test]
fn check_diff_shows_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	setup_project(tmp.path())?;

	ruledocs_cmd()
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-> old description"))
		.stderr(predicates::str::contains("+> disallow the old API"));

	Ok(())
}

#[test]
fn check_json_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	setup_project(tmp.path())?;

	let output = ruledocs_cmd()
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert_eq!(output.status.code(), Some(1));
	let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["ok"], false);
	assert_eq!(json["checked"], 2);
	assert_eq!(json["stale"][0]["rule"], "vue/html-indent");
	assert_eq!(json["stale"][1]["file"], "docs/rules/no-old-api.md");

	Ok(())
}
