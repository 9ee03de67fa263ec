//! Built-in checklist for the SISC-SESAU Next.js application.

use super::{Checklist, ContentRule, EssentialFile};

/// Critical files the Vercel deploy depends on, relative to the project root.
const EXPECTED_FILES: &[&str] = &[
    // Project configuration
    "package.json",
    "tsconfig.json",
    "vercel.json",
    "prisma/schema.prisma",
    // Authentication and middleware
    "middleware.ts",
    "app/lib/auth.ts",
    "app/lib/prisma.ts",
    // Components and pages
    "app/components/ForcePasswordChange.tsx",
    "app/force-password-change/page.tsx",
    "app/admin/usuarios/page.tsx",
    // API routes
    "app/api/auth/login/route.ts",
    "app/api/auth/change-password/route.ts",
    // Main pages
    "app/login/page.tsx",
    "app/dashboard/page.tsx",
    "app/page.tsx",
];

/// Directories that make up the expected project skeleton.
const EXPECTED_FOLDERS: &[&str] = &[
    "app",
    "app/lib",
    "app/components",
    "app/api",
    "app/api/auth",
    "app/login",
    "app/dashboard",
    "app/admin",
    "app/admin/usuarios",
    "prisma",
];

const ESSENTIAL_FILES: &[EssentialFile] = &[EssentialFile {
    path: "app/lib/prisma.ts",
    note: "[IMPORTANT] This file is ESSENTIAL for the database connection!",
}];

/// Content rules, ordered: the `package.json` dependencies check must stay
/// ahead of its devDependencies fallback.
const CONTENT_RULES: &[ContentRule] = &[
    ContentRule {
        path: "package.json",
        needles: &["\"prisma\":", "\"dependencies\""],
        note: "[INFO] prisma is declared in dependencies (CORRECT)",
    },
    ContentRule {
        path: "package.json",
        needles: &["\"prisma\":"],
        note: "[ATTENTION] prisma may be declared in devDependencies (VERIFY)",
    },
    ContentRule {
        path: "tsconfig.json",
        needles: &["\"@/*\": [\"./*\"]"],
        note: "[INFO] Path alias configuration is correct",
    },
];

/// Checklist bound to the SISC-SESAU application layout.
pub static SISC_SESAU: Checklist = Checklist {
    project: "SISC-SESAU",
    report_file_name: "sisc_preflight_report.txt",
    files: EXPECTED_FILES,
    folders: EXPECTED_FOLDERS,
    essential: ESSENTIAL_FILES,
    content_rules: CONTENT_RULES,
};
