//! 宿主视图接口模块
//! 定义提示层控制器与宿主视图之间的交互边界：
//! - ViewMetrics: 绘制期间可用的只读查询（文本测量、主题色、几何尺寸）
//! - HostView: 命令与定时器回调期间可用的可变操作（重绘、定时器、绘制钩子）

mod paint;
mod timer;

pub use paint::*;
pub use timer::*;

use crate::overlay::Rgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// 视图标识（每个编辑器标签页一个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// 主题色角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// 前景文字色
    Text,
    /// 背景底色
    Base,
}

/// 控件状态（决定主题色的取值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Normal,
    Focused,
}

/// 绘制事件的目标区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintTarget {
    /// 文本内容区
    Text,
    /// 行号栏
    Gutter,
}

/// 绘制回调的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintResult {
    /// 已完全处理，后续参与者不再绘制
    Handled,
    /// 未完全处理，宿主默认内容仍然保留
    NotHandled,
}

/// 字体描述，例如 "Sans 20"
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    pub family: String,
    pub size: f64,
}

impl FontDescription {
    /// 未指定字号时的默认值
    pub const DEFAULT_SIZE: f64 = 20.0;

    /// 解析 "<family> <size>" 形式的字体描述
    pub fn parse(desc: &str) -> Self {
        let desc = desc.trim();
        if let Some((family, size)) = desc.rsplit_once(char::is_whitespace) {
            if let Ok(size) = size.parse::<f64>() {
                if size > 0.0 {
                    return Self {
                        family: family.trim().to_string(),
                        size,
                    };
                }
            }
        }
        Self {
            family: if desc.is_empty() { "Sans" } else { desc }.to_string(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

// 配置文件中以字符串形式保存
impl Serialize for FontDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FontDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// 绘制期间的只读视图查询
pub trait ViewMetrics {
    /// 以指定字体测量文本的 (宽, 高)
    fn text_extents(&self, text: &str, font: &FontDescription) -> (f64, f64);

    /// 指定状态下的主题色
    fn theme_color(&self, role: ColorRole, state: WidgetState) -> Rgb;

    /// 视图当前状态
    fn widget_state(&self) -> WidgetState;

    /// 可见区域的 (宽, 高)
    fn visible_geometry(&self) -> (f64, f64);
}

/// 宿主视图的可变操作
pub trait HostView: ViewMetrics {
    /// 请求重绘视图
    fn request_redraw(&mut self);

    /// 注册绘制钩子
    fn subscribe_paint(&mut self) -> PaintHookId;

    /// 注销绘制钩子
    fn unsubscribe_paint(&mut self, id: PaintHookId);

    /// 注册周期定时器
    fn schedule_timer(&mut self, interval: Duration) -> TimerHandle;

    /// 取消定时器
    fn cancel_timer(&mut self, handle: TimerHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_parse() {
        assert_eq!(
            FontDescription::parse("Sans 20"),
            FontDescription {
                family: "Sans".to_string(),
                size: 20.0
            }
        );
        assert_eq!(
            FontDescription::parse("DejaVu Sans Mono 11.5"),
            FontDescription {
                family: "DejaVu Sans Mono".to_string(),
                size: 11.5
            }
        );
    }

    #[test]
    fn test_font_parse_without_size() {
        let font = FontDescription::parse("Monospace");
        assert_eq!(font.family, "Monospace");
        assert_eq!(font.size, FontDescription::DEFAULT_SIZE);

        let font = FontDescription::parse("   ");
        assert_eq!(font, FontDescription::default());
    }

    #[test]
    fn test_font_serde_as_string() {
        let font = FontDescription::parse("Serif 14");
        let json = serde_json::to_string(&font).unwrap();
        assert_eq!(json, "\"Serif 14\"");
        let back: FontDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, font);
    }
}
