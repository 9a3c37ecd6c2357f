/// 项目配置文件名
pub const CONFIG_FILE: &str = "mkctx.config.json";

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "./mkctx";

/// 写入 .gitignore 的输出目录条目
pub const GITIGNORE_ENTRY: &str = "mkctx/";

/// 始终排除的系统目录和文件，不受用户配置影响
pub const SYSTEM_EXCLUSIONS: &[&str] = &[
    // 版本控制
    ".git",
    ".svn",
    ".hg",
    // 操作系统元数据
    ".DS_Store",
    "Thumbs.db",
    // 依赖与缓存
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    // IDE
    ".vscode",
    ".idea",
];

pub struct DefaultConfig;

impl DefaultConfig {
    /// 默认扫描的根目录
    pub fn default_src() -> String {
        ".".to_string()
    }

    /// 默认输出目录
    pub fn default_output() -> String {
        DEFAULT_OUTPUT_DIR.to_string()
    }

    pub fn default_first_comment() -> String {
        "/* Project Context */".to_string()
    }

    pub fn default_last_comment() -> String {
        "/* End of Context */".to_string()
    }

    /// 默认的忽略规则（逗号分隔）
    pub fn default_ignore() -> String {
        let patterns: &[&str] = &[
            // 工具自身
            "mkctx.config.json",
            "mkctx/",
            "**/.titan/",
            // 锁文件
            "pnpm-lock.yaml",
            "package-lock.json",
            "Cargo.lock",
            // 构建输出
            "node_modules/",
            ".git/",
            "dist/",
            "build/",
            "target/",
            ".next/",
            "out/",
            ".cache",
            "temp/",
            "tmp/",
            "coverage/",
            ".nyc_output",
            ".vuepress/dist",
            ".svelte-kit",
            ".parcel-cache",
            // 环境变量
            ".env",
            ".env.local",
            ".env.development.local",
            ".env.test.local",
            ".env.production.local",
            // 日志
            "*.log",
            "npm-debug.log*",
            "yarn-debug.log*",
            "yarn-error.log*",
            ".npm",
            ".yarn-integrity",
            // 编辑器与系统文件
            ".idea/",
            ".vscode/",
            ".DS_Store",
            "Thumbs.db",
            "*.swp",
            "*.swo",
            ".~lock.*",
            // Rust 工具链
            "**/*.rs.bk",
            ".cargo/registry/",
            ".cargo/git/",
            ".rustup/",
            // 二进制与中间产物
            "*.pdb",
            "*.dSYM/",
            "*.so",
            "*.dll",
            "*.dylib",
            "*.exe",
            "*.lib",
            "*.a",
            "*.o",
            "*.rlib",
            "*.d",
            "*.tmp",
            "*.bak",
            "*.orig",
            "*.rej",
            "*.pyc",
            "*.pyo",
            "*.class",
            "*.jar",
            "*.war",
            "*.ear",
            // 压缩包与镜像
            "*.zip",
            "*.tar.gz",
            "*.rar",
            "*.7z",
            "*.iso",
            "*.img",
            "*.dmg",
            // 文档
            "*.pdf",
            "*.doc",
            "*.docx",
            "*.xls",
            "*.xlsx",
            "*.ppt",
            "*.pptx",
        ];

        patterns.join(", ")
    }
}
