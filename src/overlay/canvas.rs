//! 绘制表面抽象
//! 提示层只通过 Canvas 输出绘制命令；DisplayList 记录命令供检查

use super::{Path, PointF, RectF, Rgba};
use crate::host::FontDescription;

/// 绘制表面
pub trait Canvas {
    /// 描边路径
    fn stroke_path(&mut self, path: &Path, color: Rgba, line_width: f64);

    /// 压入裁剪路径，后续填充只作用于路径内部
    fn push_clip(&mut self, path: &Path);

    /// 弹出最近的裁剪路径
    fn pop_clip(&mut self);

    /// 填充矩形（受裁剪影响）
    fn fill_rect(&mut self, rect: RectF, color: Rgba);

    /// 在 origin（文本左上角）处绘制文本
    fn draw_text(&mut self, origin: PointF, text: &str, font: &FontDescription, color: Rgba);
}

/// 绘制命令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke {
        path: Path,
        color: Rgba,
        line_width: f64,
    },
    PushClip(Path),
    PopClip,
    FillRect {
        rect: RectF,
        color: Rgba,
    },
    Text {
        origin: PointF,
        text: String,
        font: FontDescription,
        color: Rgba,
    },
}

impl DrawOp {
    /// 命令使用的颜色（裁剪命令没有颜色）
    pub fn color(&self) -> Option<Rgba> {
        match self {
            DrawOp::Stroke { color, .. }
            | DrawOp::FillRect { color, .. }
            | DrawOp::Text { color, .. } => Some(*color),
            DrawOp::PushClip(_) | DrawOp::PopClip => None,
        }
    }
}

/// 记录绘制命令的显示列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Canvas for DisplayList {
    fn stroke_path(&mut self, path: &Path, color: Rgba, line_width: f64) {
        self.ops.push(DrawOp::Stroke {
            path: path.clone(),
            color,
            line_width,
        });
    }

    fn push_clip(&mut self, path: &Path) {
        self.ops.push(DrawOp::PushClip(path.clone()));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, origin: PointF, text: &str, font: &FontDescription, color: Rgba) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }
}
