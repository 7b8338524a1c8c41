//! Built-in ignore patterns, grouped by category, plus presets and
//! per-language bundles.

use clap::ValueEnum;
use std::collections::BTreeSet;

/// A named group of built-in ignore patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Dependencies,
    BuildOutputs,
    VersionControl,
    IdeEditor,
    OsFiles,
    TempCache,
    Logs,
    TestingCoverage,
    Databases,
    Compiled,
    Environment,
    Docs,
    LockFiles,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Dependencies,
        Category::BuildOutputs,
        Category::VersionControl,
        Category::IdeEditor,
        Category::OsFiles,
        Category::TempCache,
        Category::Logs,
        Category::TestingCoverage,
        Category::Databases,
        Category::Compiled,
        Category::Environment,
        Category::Docs,
        Category::LockFiles,
    ];

    /// Key accepted by `--categories`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Dependencies => "deps",
            Category::BuildOutputs => "build",
            Category::VersionControl => "vcs",
            Category::IdeEditor => "ide",
            Category::OsFiles => "os",
            Category::TempCache => "temp",
            Category::Logs => "logs",
            Category::TestingCoverage => "test",
            Category::Databases => "db",
            Category::Compiled => "compiled",
            Category::Environment => "env",
            Category::Docs => "docs",
            Category::LockFiles => "lock",
        }
    }

    /// Heading used for this category in the ignore-file template.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Dependencies => "Dependencies",
            Category::BuildOutputs => "Build outputs",
            Category::VersionControl => "Version control",
            Category::IdeEditor => "IDE/Editor files",
            Category::OsFiles => "OS files",
            Category::TempCache => "Temporary and cache files",
            Category::Logs => "Logs",
            Category::TestingCoverage => "Coverage/Test outputs",
            Category::Databases => "Database files",
            Category::Compiled => "Compiled files and archives",
            Category::Environment => "Environment and configuration",
            Category::Docs => "Documentation build outputs",
            Category::LockFiles => "Package manager lock files",
        }
    }

    /// Look up a category by its `--categories` key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Whether the category is part of the default preset. Lock files are
    /// opt-in: most people want to see them.
    pub fn in_defaults(self) -> bool {
        self != Category::LockFiles
    }

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Category::Dependencies => &[
                "node_modules",
                "__pycache__",
                ".venv",
                "venv",
                "env",
                "vendor",
                "bower_components",
                ".yarn",
                ".pnpm-store",
                "Packages",
                "node_modules.nosync",
            ],
            Category::BuildOutputs => &[
                "dist",
                "build",
                "out",
                ".next",
                ".nuxt",
                ".docusaurus",
                "target",
                "bin",
                "obj",
                "Debug",
                "Release",
                ".output",
            ],
            Category::VersionControl => &[".git", ".svn", ".hg", ".bzr", "CVS"],
            Category::IdeEditor => &[
                ".vscode",
                ".idea",
                "*.swp",
                "*.swo",
                "*~",
                ".project",
                ".classpath",
                ".settings",
                "*.iml",
                ".vs",
                "*.suo",
                "*.user",
            ],
            Category::OsFiles => &[
                ".DS_Store",
                ".DS_Store?",
                "._*",
                ".Spotlight-V100",
                ".Trashes",
                "ehthumbs.db",
                "Thumbs.db",
                "desktop.ini",
                "$RECYCLE.BIN",
            ],
            Category::TempCache => &[
                "*.tmp",
                "*.temp",
                ".cache",
                "tmp",
                "temp",
                ".sass-cache",
                ".eslintcache",
                ".parcel-cache",
                ".webpack",
                ".turbo",
            ],
            Category::Logs => &[
                "*.log",
                "logs",
                "npm-debug.log*",
                "yarn-debug.log*",
                "yarn-error.log*",
                "lerna-debug.log*",
                ".pnpm-debug.log*",
            ],
            Category::TestingCoverage => &[
                "coverage",
                ".coverage",
                ".coverage.*",
                ".nyc_output",
                "htmlcov",
                ".pytest_cache",
                ".tox",
                "junit.xml",
                ".karma",
                "__snapshots__",
            ],
            Category::Databases => &["*.sqlite", "*.sqlite3", "*.db", "*.sqlite-journal"],
            Category::Compiled => &[
                "*.pyc", "*.pyo", "*.class", "*.o", "*.obj", "*.so", "*.dll", "*.jar", "*.war",
                "*.ear", "*.exe",
            ],
            Category::Environment => &[
                ".env",
                ".env.local",
                ".env.development.local",
                ".env.test.local",
                ".env.production.local",
                ".env.*.local",
                "config.json",
                "secrets.json",
                ".secrets",
            ],
            Category::Docs => &["docs/_build", "site", "_site", ".docz"],
            Category::LockFiles => &[
                "package-lock.json",
                "yarn.lock",
                "pnpm-lock.yaml",
                "Pipfile.lock",
                "poetry.lock",
                "Gemfile.lock",
            ],
        }
    }
}

const AGGRESSIVE_EXTRAS: &[&str] = &["*.min.js", "*.min.css", "*.map", "public/assets"];

const PYTHON_PATTERNS: &[&str] = &[
    "__pycache__",
    "*.pyc",
    "*.pyo",
    ".venv",
    "venv",
    "env",
    ".pytest_cache",
    ".tox",
    ".coverage",
    "htmlcov",
    "dist",
    "build",
    "*.egg-info",
];

const JAVASCRIPT_PATTERNS: &[&str] = &[
    "node_modules",
    ".next",
    ".nuxt",
    "dist",
    "build",
    ".eslintcache",
    ".parcel-cache",
    "coverage",
    "*.log",
    ".env.local",
];

/// Built-in preset selected with `--pattern-mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PatternMode {
    /// Every default category
    #[default]
    Default,
    /// Dependencies, version control and OS files only
    Minimal,
    /// Defaults plus minified assets and source maps
    Aggressive,
}

impl PatternMode {
    pub fn patterns(self) -> BTreeSet<&'static str> {
        match self {
            PatternMode::Default => all_default_patterns(),
            PatternMode::Minimal => minimal_patterns(),
            PatternMode::Aggressive => aggressive_patterns(),
        }
    }
}

/// Categories written to the template and used by the default preset.
pub fn default_categories() -> impl Iterator<Item = Category> {
    Category::ALL.into_iter().filter(|c| c.in_defaults())
}

fn union<I>(categories: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = Category>,
{
    categories
        .into_iter()
        .flat_map(|c| c.patterns().iter().copied())
        .collect()
}

pub fn all_default_patterns() -> BTreeSet<&'static str> {
    union(default_categories())
}

pub fn minimal_patterns() -> BTreeSet<&'static str> {
    union([
        Category::Dependencies,
        Category::VersionControl,
        Category::OsFiles,
    ])
}

pub fn aggressive_patterns() -> BTreeSet<&'static str> {
    let mut patterns = all_default_patterns();
    patterns.extend(AGGRESSIVE_EXTRAS.iter().copied());
    patterns
}

/// Union of the named categories. Unknown keys are skipped; an empty
/// selection falls back to the full default set.
pub fn category_patterns<S: AsRef<str>>(keys: &[S]) -> BTreeSet<&'static str> {
    if keys.is_empty() {
        return all_default_patterns();
    }
    union(keys.iter().filter_map(|k| {
        let key = k.as_ref().trim();
        let found = Category::from_key(key);
        if found.is_none() {
            tracing::debug!(category = key, "unknown category, skipped");
        }
        found
    }))
}

/// Patterns for a language or framework name (case-insensitive). Unknown
/// names yield an empty set.
pub fn language_patterns(language: &str) -> BTreeSet<&'static str> {
    let bundle: &[&str] = match language.trim().to_lowercase().as_str() {
        "python" => PYTHON_PATTERNS,
        "javascript" | "js" | "node" => JAVASCRIPT_PATTERNS,
        other => {
            tracing::debug!(language = other, "no pattern bundle for language");
            &[]
        }
    };
    bundle.iter().copied().collect()
}
