//! The fixed scaffold definition
//!
//! Directories, boilerplate files, and the dependency sets installed into the
//! generated project. All file content is static and emitted verbatim; the
//! scaffolder performs no templating or substitution.

/// One boilerplate file emitted by the scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldEntry {
    /// Path relative to the workspace root
    pub path: &'static str,
    /// Static file content
    pub content: &'static str,
}

/// Project manifest whose presence marks a workspace as already scaffolded.
pub const GUARD_FILE: &str = "package.json";

/// Compiler configuration generated by the toolchain init step.
pub const COMPILER_CONFIG: &str = "tsconfig.json";

/// Metadata file dropped by the toolchain init step that the scaffold does not keep.
pub const INIT_METADATA_FILE: &str = "CLAUDE.md";

/// Directories created before any file is written.
pub const SCAFFOLD_DIRS: &[&str] = &[
    "config",
    "src/graphql",
    "src/restful",
    "src/websocket",
    "src/web/pages",
];

/// The fixed boilerplate file set, in write order.
pub const SCAFFOLD_FILES: &[ScaffoldEntry] = &[
    ScaffoldEntry {
        path: "src/graphql/graphiql.html",
        content: include_str!("../templates/graphql/graphiql.html"),
    },
    ScaffoldEntry {
        path: "src/graphql/api.ts",
        content: include_str!("../templates/graphql/api.ts"),
    },
    ScaffoldEntry {
        path: "src/graphql/graphql.d.ts",
        content: include_str!("../templates/graphql/graphql.d.ts"),
    },
    ScaffoldEntry {
        path: "src/graphql/schema.graphql",
        content: include_str!("../templates/graphql/schema.graphql"),
    },
    ScaffoldEntry {
        path: "src/graphql/resolver.ts",
        content: include_str!("../templates/graphql/resolver.ts"),
    },
    ScaffoldEntry {
        path: "src/graphql/index.ts",
        content: include_str!("../templates/graphql/index.ts"),
    },
    ScaffoldEntry {
        path: "src/restful/index.ts",
        content: include_str!("../templates/restful/index.ts"),
    },
    ScaffoldEntry {
        path: "src/websocket/index.ts",
        content: include_str!("../templates/websocket/index.ts"),
    },
    ScaffoldEntry {
        path: "src/web/logo.svg",
        content: include_str!("../templates/web/logo.svg"),
    },
    ScaffoldEntry {
        path: "src/web/styles.css",
        content: include_str!("../templates/web/styles.css"),
    },
    ScaffoldEntry {
        path: "src/web/index.html",
        content: include_str!("../templates/web/index.html"),
    },
    ScaffoldEntry {
        path: "src/web/main.tsx",
        content: include_str!("../templates/web/main.tsx"),
    },
    ScaffoldEntry {
        path: "src/web/pages/home.tsx",
        content: include_str!("../templates/web/pages/home.tsx"),
    },
    ScaffoldEntry {
        path: "src/web/pages/about.tsx",
        content: include_str!("../templates/web/pages/about.tsx"),
    },
    ScaffoldEntry {
        path: "src/web/layout.tsx",
        content: include_str!("../templates/web/layout.tsx"),
    },
    ScaffoldEntry {
        path: "index.ts",
        content: include_str!("../templates/index.ts"),
    },
    ScaffoldEntry {
        path: "bunfig.toml",
        content: include_str!("../templates/bunfig.toml"),
    },
];

/// Runtime dependencies installed into the generated project.
pub const RUNTIME_DEPENDENCIES: &[&str] = &[
    "react",
    "react-dom",
    "react-router",
    "tailwindcss",
    "bun-plugin-tailwind",
    "daisyui",
    "@graphql-tools/schema",
    "graphql-http",
];

/// Development dependencies installed into the generated project.
pub const DEV_DEPENDENCIES: &[&str] = &["@types/node", "@types/react", "@types/react-dom"];
