//! 文档模块
//! 按行保存的文本缓冲区与光标

use std::path::{Path, PathBuf};

/// 文本文档
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    lines: Vec<String>,
    /// 光标所在行
    row: usize,
    /// 光标所在列（按字符计）
    col: usize,
    path: Option<PathBuf>,
    modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            path: None,
            modified: false,
        }
    }
}

impl Document {
    /// 创建未命名的空文档
    pub fn new() -> Self {
        Self::default()
    }

    /// 从文件加载；文件不存在时创建带路径的空文档
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut doc = Self {
            path: Some(path.to_path_buf()),
            ..Self::default()
        };
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            doc.lines = content.lines().map(str::to_string).collect();
            if doc.lines.is_empty() {
                doc.lines.push(String::new());
            }
        }
        Ok(doc)
    }

    /// 保存到文档路径
    pub fn save(&mut self) -> anyhow::Result<&Path> {
        let Some(path) = self.path.as_deref() else {
            anyhow::bail!("document has no file name");
        };
        let mut content = self.lines.join("\n");
        content.push('\n');
        std::fs::write(path, content)?;
        self.modified = false;
        Ok(path)
    }

    /// 标签页标题
    pub fn title(&self) -> String {
        let name = self
            .path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        if self.modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// 光标位置 (行, 列)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// 当前行的字符数
    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// 光标列对应的字节偏移
    fn byte_offset(&self) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset();
        self.lines[self.row].insert(offset, c);
        self.col += 1;
        self.modified = true;
    }

    pub fn insert_newline(&mut self) {
        let offset = self.byte_offset();
        let rest = self.lines[self.row].split_off(offset);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
        self.modified = true;
    }

    /// 删除光标前的字符；位于行首时与上一行合并
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let offset = self.byte_offset();
            self.lines[self.row].remove(offset);
            self.modified = true;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
            self.modified = true;
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn typed(text: &str) -> Document {
        let mut doc = Document::new();
        for c in text.chars() {
            if c == '\n' {
                doc.insert_newline();
            } else {
                doc.insert_char(c);
            }
        }
        doc
    }

    #[test]
    fn test_typing_and_newline() {
        let doc = typed("ab\ncd");
        assert_eq!(doc.lines(), &["ab", "cd"]);
        assert_eq!(doc.cursor(), (1, 2));
        assert!(doc.is_modified());
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut doc = typed("ab\ncd");
        doc.move_left();
        doc.move_left();
        doc.backspace();
        assert_eq!(doc.lines(), &["abcd"]);
        assert_eq!(doc.cursor(), (0, 2));

        let mut start = Document::new();
        start.backspace();
        assert_eq!(start.lines(), &[""]);
        assert!(!start.is_modified());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut doc = typed("保存x");
        doc.move_left();
        doc.backspace();
        assert_eq!(doc.lines(), &["保x"]);
        doc.insert_char('存');
        assert_eq!(doc.lines(), &["保存x"]);
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut doc = typed("long line\nab");
        doc.move_up();
        assert_eq!(doc.cursor(), (0, 2));
        doc.move_right();
        doc.move_right();
        doc.move_right();
        doc.move_down();
        assert_eq!(doc.cursor(), (1, 2));
        doc.move_right();
        assert_eq!(doc.cursor(), (1, 2));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut doc = Document::load(&path).unwrap();
        assert_eq!(doc.title(), "notes.txt");
        doc.insert_char('a');
        doc.insert_newline();
        doc.insert_char('b');
        assert_eq!(doc.title(), "notes.txt*");

        doc.save().unwrap();
        assert!(!doc.is_modified());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.lines(), &["a", "b"]);
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = typed("x");
        assert!(doc.save().is_err());
        assert!(doc.is_modified());
        assert_eq!(doc.title(), "untitled*");
    }
}
