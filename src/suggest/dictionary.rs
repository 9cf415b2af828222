//! Keyword dictionary for content-based tag extraction.
//!
//! Canonical tags with the trigger phrases that imply them.

/// Dictionary entry definition
pub struct DictionaryEntry {
    pub tag: &'static str,
    pub triggers: &'static [&'static str],
}

/// Built-in dictionary covering the board's common topics
pub const BUILTIN_DICTIONARY: &[DictionaryEntry] = &[
    DictionaryEntry {
        tag: "react",
        triggers: &["react", "reactjs", "react.js", "jsx", "hooks", "usestate", "useeffect"],
    },
    DictionaryEntry {
        tag: "javascript",
        triggers: &["javascript", "js", "vanilla js", "ecmascript", "es6", "es2015"],
    },
    DictionaryEntry {
        tag: "typescript",
        triggers: &["typescript", "ts", "type script", "typed javascript"],
    },
    DictionaryEntry {
        tag: "next.js",
        triggers: &["next.js", "nextjs", "next js", "vercel", "app router", "pages router"],
    },
    DictionaryEntry {
        tag: "node.js",
        triggers: &["node.js", "nodejs", "node js", "npm", "express", "server side"],
    },
    DictionaryEntry {
        tag: "python",
        triggers: &["python", "django", "flask", "fastapi", "pandas", "numpy"],
    },
    DictionaryEntry {
        tag: "css",
        triggers: &["css", "stylesheet", "styles", "flexbox", "grid", "responsive"],
    },
    DictionaryEntry {
        tag: "html",
        triggers: &["html", "markup", "dom", "semantic", "accessibility"],
    },
    DictionaryEntry {
        tag: "database",
        triggers: &["database", "sql", "postgresql", "mysql", "mongodb", "prisma", "query"],
    },
    DictionaryEntry {
        tag: "authentication",
        triggers: &["auth", "authentication", "login", "signup", "jwt", "session", "oauth"],
    },
    DictionaryEntry {
        tag: "api",
        triggers: &["api", "rest", "graphql", "endpoint", "fetch", "axios", "http"],
    },
    DictionaryEntry {
        tag: "tailwind",
        triggers: &["tailwind", "tailwindcss", "utility classes", "responsive design"],
    },
    DictionaryEntry {
        tag: "supabase",
        triggers: &["supabase", "realtime", "row level security", "rls"],
    },
    DictionaryEntry {
        tag: "firebase",
        triggers: &["firebase", "firestore", "firebase auth"],
    },
    DictionaryEntry {
        tag: "deployment",
        triggers: &["deploy", "deployment", "hosting", "vercel", "netlify", "heroku"],
    },
    DictionaryEntry {
        tag: "testing",
        triggers: &["test", "testing", "jest", "cypress", "unit test", "integration"],
    },
    DictionaryEntry {
        tag: "performance",
        triggers: &["performance", "optimization", "lazy loading", "caching", "speed"],
    },
    DictionaryEntry {
        tag: "security",
        triggers: &["security", "xss", "csrf", "sanitization", "validation"],
    },
    DictionaryEntry {
        tag: "mobile",
        triggers: &["mobile", "responsive", "react native", "ios", "android"],
    },
    DictionaryEntry {
        tag: "state management",
        triggers: &["state", "redux", "zustand", "context", "global state"],
    },
    DictionaryEntry {
        tag: "styling",
        triggers: &["styling", "styled components", "emotion", "sass", "less"],
    },
    DictionaryEntry {
        tag: "forms",
        triggers: &["form", "validation", "input", "form handling", "react hook form"],
    },
    DictionaryEntry {
        tag: "routing",
        triggers: &["routing", "router", "navigation", "routes", "link"],
    },
    DictionaryEntry {
        tag: "error handling",
        triggers: &["error", "exception", "try catch", "error boundary"],
    },
    DictionaryEntry {
        tag: "data fetching",
        triggers: &["fetch", "axios", "swr", "react query", "tanstack query"],
    },
    DictionaryEntry {
        tag: "build tools",
        triggers: &["webpack", "vite", "rollup", "esbuild", "bundler"],
    },
    DictionaryEntry {
        tag: "git",
        triggers: &["git", "github", "version control", "merge", "branch"],
    },
];

/// Immutable trigger dictionary injected into the extractor.
///
/// Iteration order is insertion order; the extractor's output order
/// depends on it.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    entries: Vec<(String, Vec<String>)>,
}

impl TagDictionary {
    /// Build a dictionary from (canonical tag, triggers) pairs.
    ///
    /// Triggers are lowercased and empty ones dropped; a repeated
    /// canonical tag keeps its first entry.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut seen = std::collections::HashSet::new();
        let normalized = entries
            .into_iter()
            .filter(|(tag, _)| seen.insert(tag.clone()))
            .map(|(tag, triggers)| {
                let triggers = triggers
                    .into_iter()
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect();
                (tag, triggers)
            })
            .collect();

        Self { entries: normalized }
    }

    /// The built-in board dictionary
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DICTIONARY.iter().map(|entry| {
            (
                entry.tag.to_string(),
                entry.triggers.iter().map(|t| t.to_string()).collect(),
            )
        }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(tag, triggers)| (tag.as_str(), triggers.as_slice()))
    }
}
