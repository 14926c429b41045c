//! 固定关键字表（构建阶段名 + 本地化的 error/warning）

/// 按输出顺序排列的关键字；匹配区分大小写
pub const KEYWORDS: [&str; 7] = [
    "StructurePanel",
    "MarkupCompilePass1",
    "CoreCompile",
    "error",
    "오류",
    "warning",
    "경고",
];

/// 需要额外输出扩展上下文的关键字
pub const FOCUS_KEYWORD: &str = "StructurePanel";
