//! 终端绘制表面
//! 将提示层的浮点绘制命令映射到 ratatui Buffer 的字符格上
//!
//! 坐标以区域左上角为原点，单位为字符格；字符格中心落在图形内才会被绘制。
//! 透明度通过与字符格现有背景色混合来模拟。

use crate::host::FontDescription;
use crate::overlay::{Canvas, Path, PointF, RectF, Rgb, Rgba};
use crate::ui::{color_to_rgb, rgb_to_color};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::ops::Range;

/// 坐标所在的字符格（按格中心判断）
fn cell_index(v: f64) -> i64 {
    (v - 0.5).ceil() as i64
}

/// 中心落在 [start, end) 内的字符格
fn cell_range(start: f64, end: f64) -> Range<i64> {
    cell_index(start)..cell_index(end)
}

/// ratatui Buffer 上的绘制表面
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    /// 字符格没有 RGB 背景时用于混合的底色
    backdrop: Rgb,
    clips: Vec<Path>,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, backdrop: Rgb) -> Self {
        Self {
            buf,
            area,
            backdrop,
            clips: Vec::new(),
        }
    }

    /// 区域内相对坐标转换为 Buffer 绝对坐标
    fn position(&self, col: i64, row: i64) -> Option<(u16, u16)> {
        if col < 0 || row < 0 || col >= self.area.width as i64 || row >= self.area.height as i64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    fn cell_bg(&self, pos: (u16, u16)) -> Rgb {
        self.buf
            .cell(pos)
            .and_then(|cell| color_to_rgb(cell.bg))
            .unwrap_or(self.backdrop)
    }

    fn clipped(&self, col: i64, row: i64) -> bool {
        let center = PointF::new(col as f64 + 0.5, row as f64 + 0.5);
        self.clips.iter().any(|clip| !clip.contains(center))
    }

    /// 在字符格上放置边框字符，前景色与背景混合
    fn put_glyph(&mut self, col: i64, row: i64, glyph: &str, color: Rgba) {
        let Some(pos) = self.position(col, row) else {
            return;
        };
        let fg = self.cell_bg(pos).blend(color.color, color.alpha);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_symbol(glyph).set_fg(rgb_to_color(fg));
        }
    }
}

impl Canvas for BufferCanvas<'_> {
    /// 字符格无法表现曲线：沿路径包围盒绘制圆角边框
    fn stroke_path(&mut self, path: &Path, color: Rgba, _line_width: f64) {
        if color.is_transparent() {
            return;
        }
        let Some(bounds) = path.bounds() else {
            return;
        };
        let cols = cell_range(bounds.x, bounds.right());
        let rows = cell_range(bounds.y, bounds.bottom());
        if cols.is_empty() || rows.is_empty() {
            return;
        }
        let (left, right) = (cols.start, cols.end - 1);
        let (top, bottom) = (rows.start, rows.end - 1);

        for col in left..=right {
            self.put_glyph(col, top, "─", color);
            self.put_glyph(col, bottom, "─", color);
        }
        for row in top..=bottom {
            self.put_glyph(left, row, "│", color);
            self.put_glyph(right, row, "│", color);
        }
        if left < right && top < bottom {
            self.put_glyph(left, top, "╭", color);
            self.put_glyph(right, top, "╮", color);
            self.put_glyph(left, bottom, "╰", color);
            self.put_glyph(right, bottom, "╯", color);
        }
    }

    fn push_clip(&mut self, path: &Path) {
        self.clips.push(path.clone());
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        for row in cell_range(rect.y, rect.bottom()) {
            for col in cell_range(rect.x, rect.right()) {
                if self.clipped(col, row) {
                    continue;
                }
                let Some(pos) = self.position(col, row) else {
                    continue;
                };
                let bg = self.cell_bg(pos).blend(color.color, color.alpha);
                if let Some(cell) = self.buf.cell_mut(pos) {
                    cell.set_bg(rgb_to_color(bg));
                }
            }
        }
    }

    /// 文本前景色与起始格的背景混合；超出区域的部分被截断
    fn draw_text(&mut self, origin: PointF, text: &str, _font: &FontDescription, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        let row = cell_index(origin.y);
        let mut col = cell_index(origin.x);
        let skip = if col < 0 { (-col) as usize } else { 0 };
        col = col.max(0);

        let Some(pos) = self.position(col, row) else {
            return;
        };
        let fg = self.cell_bg(pos).blend(color.color, color.alpha);
        let visible: String = text.chars().skip(skip).collect();
        let max_width = (self.area.right() - pos.0) as usize;
        self.buf.set_stringn(
            pos.0,
            pos.1,
            visible,
            max_width,
            Style::default().fg(rgb_to_color(fg)),
        );
    }
}
