use std::path::Path;

/// 可识别的文本文件扩展名（小写，不含 `.`）
const TEXT_EXTENSIONS: &[&str] = &[
    // JavaScript / TypeScript
    "js", "ts", "jsx", "tsx", "mjs", "cjs",
    // 脚本语言
    "py", "pyw", "rb", "rake", "php", "phtml", "lua", "r",
    // 编译型语言
    "go", "rs", "java", "kt", "kts", "scala", "cs", "fs", "vb",
    "cpp", "c", "h", "hpp", "cc", "cxx", "swift", "m", "mm", "sol",
    // 函数式语言
    "ex", "exs", "erl", "hrl", "clj", "cljs", "cljc", "hs", "lhs", "elm",
    // Shell
    "sh", "bash", "zsh", "fish", "ps1", "bat", "cmd",
    // Web 与模板
    "html", "htm", "xhtml", "css", "scss", "sass", "less", "styl",
    "vue", "svelte", "astro", "pug", "jade", "ejs", "hbs", "handlebars", "twig",
    // 数据与配置
    "sql", "json", "json5", "xml", "xsl", "xslt", "yaml", "yml",
    "toml", "ini", "cfg", "conf", "env", "graphql", "gql", "proto",
    "tf", "tfvars", "prisma",
    // 文档
    "md", "markdown", "mdx", "txt", "text",
    // 以扩展名形式出现的工具配置
    "dockerfile", "makefile", "gitignore", "gitattributes", "editorconfig",
    "eslintrc", "prettierrc", "babelrc",
];

/// 没有扩展名但仍按文本处理的文件名（小写）
const KNOWN_FILES: &[&str] = &[
    "dockerfile", "makefile", "gemfile", "rakefile",
    "procfile", "vagrantfile", "jenkinsfile",
    ".gitignore", ".gitattributes", ".editorconfig",
    ".eslintrc", ".prettierrc", ".babelrc",
    ".env", ".env.example", ".env.local",
    "readme.md", "readme.txt", "license", "license.md", "license.txt",
];

/// 扩展名到代码块语言标签的映射
const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("js", "javascript"), ("ts", "typescript"), ("jsx", "jsx"), ("tsx", "tsx"),
    ("py", "python"), ("rb", "ruby"), ("go", "go"), ("rs", "rust"),
    ("java", "java"), ("kt", "kotlin"), ("cs", "csharp"), ("cpp", "cpp"),
    ("c", "c"), ("h", "c"), ("hpp", "cpp"), ("php", "php"),
    ("sh", "bash"), ("bash", "bash"), ("zsh", "bash"), ("ps1", "powershell"),
    ("sql", "sql"), ("html", "html"), ("css", "css"), ("scss", "scss"),
    ("sass", "sass"), ("less", "less"), ("json", "json"), ("xml", "xml"),
    ("yaml", "yaml"), ("yml", "yaml"), ("md", "markdown"), ("vue", "vue"),
    ("svelte", "svelte"), ("dockerfile", "dockerfile"), ("makefile", "makefile"),
    ("toml", "toml"), ("ini", "ini"), ("cfg", "ini"), ("env", "bash"),
];

/// 无扩展名时的兜底语言标签
pub const FALLBACK_LANGUAGE: &str = "text";

/// 文件的小写扩展名，不含 `.`；`.gitignore` 这类点文件没有扩展名
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// 按允许列表判断文件是否为文本文件
pub fn is_text(filename: &str) -> bool {
    let basename = basename_lowercase(filename);
    if KNOWN_FILES.contains(&basename.as_str()) {
        return true;
    }

    extension_of(filename)
        .map(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// 文件的代码块语言标签
pub fn language(filename: &str) -> String {
    let basename = basename_lowercase(filename);

    match basename.as_str() {
        "dockerfile" => return "dockerfile".to_string(),
        "makefile" => return "makefile".to_string(),
        name if name.starts_with(".env") => return "bash".to_string(),
        _ => {}
    }

    match extension_of(filename) {
        Some(ext) => LANGUAGE_TAGS
            .iter()
            .find(|(key, _)| *key == ext)
            .map(|(_, tag)| tag.to_string())
            .unwrap_or(ext),
        None => FALLBACK_LANGUAGE.to_string(),
    }
}

fn basename_lowercase(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
