//! 多行文本与字符串序列的互相转换
//!
//! `expressions` 字段在表单里是一个多行文本框，在记录里是有序的字符串序列。

/// 将多行文本拆分为字符串序列
///
/// 先把 `\r\n` 统一为 `\n`，再按 `\n` 拆分。空字符串得到空序列。
pub fn string_to_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// 将字符串序列用 `\n` 连接为多行文本
pub fn lines_to_string(lines: &[String]) -> String {
    lines.join("\n")
}
