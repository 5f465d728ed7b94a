//! Framework, dependency and build tool detection from well-known manifests

use crate::config::constants::files;
use crate::utils::is_regular_file;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Dependency-name keyword -> framework label, matched by lowercase substring
const FRAMEWORK_KEYWORDS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("next", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("express", "Express"),
    ("fastify", "Fastify"),
    ("koa", "Koa"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("laravel", "Laravel"),
];

/// devDependency name -> bundler label
const JS_BUILD_TOOLS: &[(&str, &str)] = &[
    ("webpack", "webpack"),
    ("vite", "Vite"),
    ("rollup", "Rollup"),
    ("parcel", "Parcel"),
    ("esbuild", "esbuild"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub frameworks: Vec<String>,
    pub dependencies: Vec<String>,
    pub build_tools: Vec<String>,
}

impl TechStack {
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty() && self.dependencies.is_empty() && self.build_tools.is_empty()
    }

    fn add_framework(&mut self, name: &str) {
        push_unique(&mut self.frameworks, name);
    }

    fn add_build_tool(&mut self, name: &str) {
        push_unique(&mut self.build_tools, name);
    }

    fn add_dependencies<I>(&mut self, names: I, limit: usize)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names.into_iter().take(limit) {
            push_unique(&mut self.dependencies, &name);
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// Inspect the manifests at the repository root
pub fn detect_tech_stack(root: &Path, max_dependencies: usize) -> TechStack {
    let mut stack = TechStack::default();

    if let Some(content) = read_manifest(root, files::PACKAGE_JSON) {
        inspect_package_json(&content, max_dependencies, &mut stack);
    }
    if let Some(content) = read_manifest(root, files::REQUIREMENTS_TXT) {
        stack.add_dependencies(parse_requirements(&content), max_dependencies);
    }
    if let Some(content) = read_manifest(root, files::GO_MOD) {
        if content.lines().any(|line| line.starts_with("require (")) {
            stack.add_framework("Go Modules");
        }
    }
    if let Some(content) = read_manifest(root, files::CARGO_TOML) {
        stack.add_framework("Cargo/Rust");
        stack.add_build_tool("Cargo");
        stack.add_dependencies(cargo_dependencies(&content), max_dependencies);
    }
    if is_regular_file(&root.join(files::POM_XML)) {
        stack.add_framework("Maven/Java");
        stack.add_build_tool("Maven");
    }
    if is_regular_file(&root.join(files::BUILD_GRADLE))
        || is_regular_file(&root.join(files::BUILD_GRADLE_KTS))
    {
        stack.add_build_tool("Gradle");
    }
    if is_regular_file(&root.join(files::MAKEFILE)) {
        stack.add_build_tool("Make");
    }
    if is_regular_file(&root.join(files::DOCKERFILE)) {
        stack.add_build_tool("Docker");
    }

    stack
}

fn read_manifest(root: &Path, name: &str) -> Option<String> {
    let path = root.join(name);
    if !is_regular_file(&path) {
        return None;
    }
    match fs::read(&path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            None
        }
    }
}

fn inspect_package_json(content: &str, max_dependencies: usize, stack: &mut TechStack) {
    let manifest: JsonValue = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(err) => {
            warn!("Skipping malformed package.json: {}", err);
            return;
        }
    };

    let dependencies: Vec<String> = object_keys(manifest.get("dependencies"));
    for dependency in &dependencies {
        let lowered = dependency.to_lowercase();
        for (keyword, framework) in FRAMEWORK_KEYWORDS {
            if lowered.contains(keyword) {
                stack.add_framework(framework);
            }
        }
    }
    stack.add_dependencies(dependencies, max_dependencies);

    for dev_dependency in object_keys(manifest.get("devDependencies")) {
        let lowered = dev_dependency.to_lowercase();
        if let Some((_, tool)) = JS_BUILD_TOOLS.iter().find(|(name, _)| lowered == *name) {
            stack.add_build_tool(tool);
        }
    }
}

fn object_keys(value: Option<&JsonValue>) -> Vec<String> {
    value
        .and_then(JsonValue::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

/// Package names from requirements.txt lines (`name==1.0`, `name>=2`, bare names)
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| {
            let name = line
                .split("==")
                .next()
                .and_then(|head| head.split(">=").next())
                .unwrap_or(line)
                .trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

fn cargo_dependencies(content: &str) -> Vec<String> {
    match content.parse::<toml::Table>() {
        Ok(table) => table
            .get("dependencies")
            .and_then(toml::Value::as_table)
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default(),
        Err(err) => {
            debug!("Cargo.toml did not parse: {}", err);
            Vec::new()
        }
    }
}
