#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub fn ruledocs_cmd() -> Command {
	let mut cmd =
		Command::cargo_bin("ruledocs").unwrap_or_else(|e| panic!("ruledocs binary: {e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub const RULES_JSON: &str = r#"{
	"rules": [
		{
			"name": "html-indent",
			"description": "enforce consistent indentation in `<template>`",
			"fixable": true,
			"categories": ["strongly-recommended"]
		},
		{
			"name": "no-old-api",
			"description": "disallow the old API",
			"deprecated": true,
			"replacedBy": ["vue/no-new-api"]
		}
	]
}"#;

pub const CONFIG: &str = r#"rule_prefix = "vue/"
line_ending = "lf"

[presets]
label = "plugin:vue/{name}"

[presets.extends]
recommended = "strongly-recommended"
"#;

pub const INDENT_DOC: &str = "# vue/html-indent
> old description

## :book: Rule Details

<eslint-code-block :rules=\"{'vue/html-indent': ['error']}\">
```vue
<template>
  <div />
</template>
```
</eslint-code-block>
";

pub const OLD_API_DOC: &str = "# vue/no-old-api

Nothing here yet.
";

/// Lay out a project with a config, a registry, and one page per rule.
pub fn setup_project(root: &Path) -> std::io::Result<()> {
	std::fs::write(root.join("ruledocs.toml"), CONFIG)?;
	std::fs::write(root.join("rules.json"), RULES_JSON)?;
	std::fs::create_dir_all(root.join("docs/rules"))?;
	std::fs::write(root.join("docs/rules/html-indent.md"), INDENT_DOC)?;
	std::fs::write(root.join("docs/rules/no-old-api.md"), OLD_API_DOC)?;
	Ok(())
}
