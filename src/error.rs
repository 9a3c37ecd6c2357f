use thiserror::Error;

/// 上下文生成过程中的错误类型
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("路径不存在: {0}")]
    PathNotFound(String),

    #[error("不是目录: {0}")]
    NotADirectory(String),

    #[error("没有找到任何文件: {0}")]
    EmptyResult(String),

    #[error("不支持的输出格式: {0}")]
    UnsupportedFormat(String),

    #[error("无效的忽略规则: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("无法读取目录: {path} ({message})")]
    DirectoryUnreadable { path: String, message: String },

    #[error("无法读取文件: {path}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("文件不是有效的 UTF-8 文本: {0}")]
    DecodeFailure(String),

    #[error("无法写入文件: {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;

impl ContextError {
    /// 是否为“没有可处理的文件”这类非致命结果
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ContextError::EmptyResult(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_path_not_found() {
        let err = ContextError::PathNotFound("/missing".to_string());
        assert_eq!(err.to_string(), "路径不存在: /missing");
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = ContextError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "不支持的输出格式: yaml");
    }

    #[test]
    fn test_empty_result_is_distinguishable() {
        assert!(ContextError::EmptyResult(".".to_string()).is_empty_result());
        assert!(!ContextError::PathNotFound(".".to_string()).is_empty_result());
    }
}
