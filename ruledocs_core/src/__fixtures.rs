use std::path::Path;

use crate::DocsConfig;
use crate::LineEnding;
use crate::RuleDescriptor;

pub fn plain_rule() -> RuleDescriptor {
	RuleDescriptor {
		id: Some("vue/plain-rule".to_string()),
		..RuleDescriptor::new("plain-rule", "disallow something plain")
	}
}

pub fn fixable_rule() -> RuleDescriptor {
	RuleDescriptor {
		id: Some("vue/fixable-rule".to_string()),
		fixable: true,
		categories: vec!["strict".to_string(), "recommended".to_string()],
		..RuleDescriptor::new("fixable-rule", "enforce a fixable style")
	}
}

pub fn deprecated_rule(replaced_by: &[&str]) -> RuleDescriptor {
	RuleDescriptor {
		deprecated: true,
		replaced_by: replaced_by.iter().map(ToString::to_string).collect(),
		categories: vec!["recommended".to_string()],
		..RuleDescriptor::new("old-rule", "an outdated rule")
	}
}

pub fn extension_rule() -> RuleDescriptor {
	RuleDescriptor {
		id: Some("vue/eqeqeq".to_string()),
		extension_rule: true,
		..RuleDescriptor::new("eqeqeq", "require the use of `===` and `!==` in `<template>`")
	}
}

/// Defaults with `\n` line endings so results do not depend on the host.
pub fn lf_config() -> DocsConfig {
	DocsConfig {
		line_ending: LineEnding::Lf,
		..DocsConfig::default()
	}
}

pub const EXISTING_DOC: &str = "---
pageClass: rule-details
sidebarDepth: 0
title: vue/plain-rule
description: stale description
---
# vue/plain-rule
> stale description

- :gear: This rule is included in `\"plugin:vue/essential\"`.

## :book: Rule Details

This rule reports plain things.

<eslint-code-block fix :rules=\"{'vue/plain-rule': ['error']}\">
```vue
<template>
  <div />
</template>
```
</eslint-code-block>

## :mag: Implementation

- [Rule source](https://example.com/old.js)
- [Test source](https://example.com/old-test.js)
";

pub fn write_file(path: &Path, content: &str) {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create dir: {e}"));
	}
	std::fs::write(path, content).unwrap_or_else(|e| panic!("write: {e}"));
}

pub fn read_file(path: &Path) -> String {
	std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read: {e}"))
}
