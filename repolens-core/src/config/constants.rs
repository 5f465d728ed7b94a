/// Configuration file discovery
pub mod config {
    pub const CONFIG_FILE_NAME: &str = "repolens.toml";
    pub const CONFIG_DIR_NAME: &str = ".repolens";
    pub const IGNORE_FILE_NAME: &str = ".repolensignore";
}

/// Default analysis limits
pub mod limits {
    pub const README_MAX_CHARS: usize = 2000;
    pub const MAX_DEPENDENCIES: usize = 20;
    pub const MAX_KEY_FILES_PER_DIR: usize = 10;
    pub const MAX_MAIN_FILES: usize = 10;
    pub const MAX_CONFIG_FILES: usize = 15;
    pub const MAX_TEST_FILES: usize = 10;
    pub const MAX_API_FILES: usize = 15;
}

/// Directory names skipped during traversal (hidden directories are always skipped)
pub mod skip {
    pub const DEFAULT_SKIP_DIRS: &[&str] = &[
        "node_modules",
        "__pycache__",
        "venv",
        "dist",
        "build",
        "target",
        "vendor",
    ];
}

/// Clone defaults
pub mod clone {
    pub const GIT_BINARY: &str = "git";
    pub const DEPTH: u32 = 1;
    pub const TIMEOUT_SECONDS: u64 = 300;
    pub const TEMP_DIR_PREFIX: &str = "repolens-";
}

/// GitHub addressing
pub mod github {
    pub const HOST: &str = "github.com";
    pub const HTTPS_BASE: &str = "https://github.com";
}

/// File names inspected by the analyzers
pub mod files {
    pub const README_CANDIDATES: &[&str] = &["README.md", "README.txt", "README", "readme.md"];

    pub const PACKAGE_JSON: &str = "package.json";
    pub const REQUIREMENTS_TXT: &str = "requirements.txt";
    pub const GO_MOD: &str = "go.mod";
    pub const CARGO_TOML: &str = "Cargo.toml";
    pub const POM_XML: &str = "pom.xml";
    pub const BUILD_GRADLE: &str = "build.gradle";
    pub const BUILD_GRADLE_KTS: &str = "build.gradle.kts";
    pub const MAKEFILE: &str = "Makefile";
    pub const DOCKERFILE: &str = "Dockerfile";

    /// Manifests that count as key files in the structure view
    pub const STRUCTURE_MANIFESTS: &[&str] = &[
        "README.md",
        "package.json",
        "requirements.txt",
        "Cargo.toml",
        "go.mod",
        "pom.xml",
    ];

    /// Source extensions that count as key files in the structure view
    pub const STRUCTURE_EXTENSIONS: &[&str] = &["py", "js", "ts", "go", "rs", "java", "rb"];
}

/// Skill packaging for assistant hosts
pub mod skill {
    pub const DEFAULT_NAME: &str = "github-analyzer";
    pub const DEFAULT_DESCRIPTION: &str = "Analyze a GitHub repository and produce a Markdown report covering languages, tech stack, structure, entry points and API files.";
    pub const FILE_NAME: &str = "SKILL.md";
    pub const HOST_DIR: &str = ".claude";
    pub const SKILLS_DIR: &str = "skills";
}
