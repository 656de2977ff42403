//! 主题模块
//! 实现 Catppuccin 配色方案（Mocha 深色 / Latte 浅色）

use crate::host::{ColorRole, WidgetState};
use crate::overlay::Rgb;
use ratatui::style::Color;

/// Catppuccin Mocha 配色
/// 参考: https://github.com/catppuccin/catppuccin
pub struct CatppuccinMocha;

impl CatppuccinMocha {
    // 基础色
    pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
    pub const MANTLE: Color = Color::Rgb(24, 24, 37); // #181825

    // 表面色
    pub const SURFACE0: Color = Color::Rgb(49, 50, 68); // #313244
    pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a

    // 覆盖色
    pub const OVERLAY0: Color = Color::Rgb(108, 112, 134); // #6c7086

    // 文字色
    pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
    pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222); // #bac2de

    // 强调色
    pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
    pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8
    pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
    pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa
}

/// Catppuccin Latte 配色
pub struct CatppuccinLatte;

impl CatppuccinLatte {
    pub const BASE: Color = Color::Rgb(239, 241, 245); // #eff1f5
    pub const MANTLE: Color = Color::Rgb(230, 233, 239); // #e6e9ef
    pub const SURFACE0: Color = Color::Rgb(204, 208, 218); // #ccd0da
    pub const SURFACE1: Color = Color::Rgb(188, 192, 204); // #bcc0cc
    pub const OVERLAY0: Color = Color::Rgb(156, 160, 176); // #9ca0b0
    pub const TEXT: Color = Color::Rgb(76, 79, 105); // #4c4f69
    pub const SUBTEXT1: Color = Color::Rgb(92, 95, 119); // #5c5f77
    pub const MAUVE: Color = Color::Rgb(136, 57, 239); // #8839ef
    pub const RED: Color = Color::Rgb(210, 15, 57); // #d20f39
    pub const GREEN: Color = Color::Rgb(64, 160, 43); // #40a02b
    pub const BLUE: Color = Color::Rgb(30, 102, 245); // #1e66f5
}

/// 应用主题
/// 定义各 UI 元素使用的颜色
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色（文字）
    pub fg: Color,
    /// 聚焦视图的背景色
    pub bg_focused: Color,
    /// 聚焦视图的前景色
    pub fg_focused: Color,
    /// 行号颜色
    pub gutter_fg: Color,
    /// 边框颜色
    pub border: Color,
    /// 当前标签页高亮
    pub selection: Color,
    /// 状态栏背景
    pub status_bg: Color,
    /// 状态栏文字
    pub status_fg: Color,
    /// 标题颜色
    pub title: Color,
    /// 成功色
    pub success: Color,
    /// 错误色
    pub error: Color,
    /// 信息色
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    /// 按名称选择主题，未知名称回退到 Mocha
    pub fn by_name(name: &str) -> Self {
        match name {
            "catppuccin-latte" => Self::catppuccin_latte(),
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            other => {
                log::warn!("unknown theme {:?}, falling back to catppuccin-mocha", other);
                Self::catppuccin_mocha()
            }
        }
    }

    /// 创建 Catppuccin Mocha 主题
    pub fn catppuccin_mocha() -> Self {
        Self {
            bg: CatppuccinMocha::BASE,
            fg: CatppuccinMocha::TEXT,
            bg_focused: CatppuccinMocha::BASE,
            fg_focused: CatppuccinMocha::TEXT,
            gutter_fg: CatppuccinMocha::OVERLAY0,
            border: CatppuccinMocha::SURFACE1,
            selection: CatppuccinMocha::SURFACE0,
            status_bg: CatppuccinMocha::MANTLE,
            status_fg: CatppuccinMocha::SUBTEXT1,
            title: CatppuccinMocha::MAUVE,
            success: CatppuccinMocha::GREEN,
            error: CatppuccinMocha::RED,
            info: CatppuccinMocha::BLUE,
        }
    }

    /// 创建 Catppuccin Latte 主题
    pub fn catppuccin_latte() -> Self {
        Self {
            bg: CatppuccinLatte::MANTLE,
            fg: CatppuccinLatte::SUBTEXT1,
            bg_focused: CatppuccinLatte::BASE,
            fg_focused: CatppuccinLatte::TEXT,
            gutter_fg: CatppuccinLatte::OVERLAY0,
            border: CatppuccinLatte::SURFACE1,
            selection: CatppuccinLatte::SURFACE0,
            status_bg: CatppuccinLatte::MANTLE,
            status_fg: CatppuccinLatte::SUBTEXT1,
            title: CatppuccinLatte::MAUVE,
            success: CatppuccinLatte::GREEN,
            error: CatppuccinLatte::RED,
            info: CatppuccinLatte::BLUE,
        }
    }

    /// 文本视图的背景色
    pub fn view_bg(&self, state: WidgetState) -> Color {
        match state {
            WidgetState::Normal => self.bg,
            WidgetState::Focused => self.bg_focused,
        }
    }

    /// 提示层使用的主题色
    pub fn color(&self, role: ColorRole, state: WidgetState) -> Rgb {
        let color = match (role, state) {
            (ColorRole::Text, WidgetState::Normal) => self.fg,
            (ColorRole::Text, WidgetState::Focused) => self.fg_focused,
            (ColorRole::Base, state) => self.view_bg(state),
        };
        color_to_rgb(color).unwrap_or(Rgb::BLACK)
    }
}

/// ratatui 颜色转换为浮点 RGB；非 RGB 颜色返回 None
pub fn color_to_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb::from_u8(r, g, b)),
        Color::Black => Some(Rgb::BLACK),
        Color::White => Some(Rgb::new(1.0, 1.0, 1.0)),
        _ => None,
    }
}

/// 浮点 RGB 转换为 ratatui 颜色
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.to_u8();
    Color::Rgb(r, g, b)
}
