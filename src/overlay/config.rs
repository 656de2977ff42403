//! 提示层参数

use crate::host::FontDescription;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 提示层动画与外观参数
///
/// `Default` 为像素单位的桌面参数；终端宿主以字符格为单位，使用 [`OverlayConfig::terminal`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default = "OverlayConfig::terminal")]
pub struct OverlayConfig {
    /// 定时器周期（毫秒）
    pub tick_interval_ms: u64,
    /// 完全显示后的停留时间（毫秒）
    pub hold_duration_ms: u64,
    /// 每次 tick 的透明度增量
    pub fade_speed: f64,
    /// 文本与背景面板之间的留白 (x, y)
    pub margin: (f64, f64),
    /// 面板圆角半径
    pub corner_radius: f64,
    /// 背景变暗系数
    pub darken_amount: f64,
    /// 提示文本字体
    pub font: FontDescription,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            hold_duration_ms: 2000,
            fade_speed: 0.2,
            margin: (10.0, 5.0),
            corner_radius: 5.0,
            darken_amount: 0.1,
            font: FontDescription::default(),
        }
    }
}

impl OverlayConfig {
    /// 终端参数（字符格单位）
    pub fn terminal() -> Self {
        Self {
            margin: (2.0, 1.0),
            corner_radius: 1.0,
            ..Self::default()
        }
    }

    /// 修正越界参数
    pub fn sanitized(mut self) -> Self {
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.fade_speed = if self.fade_speed.is_finite() {
            self.fade_speed.clamp(0.001, 1.0)
        } else {
            0.2
        };
        self.margin = (self.margin.0.max(0.0), self.margin.1.max(0.0));
        self.corner_radius = self.corner_radius.max(0.0);
        self.darken_amount = self.darken_amount.clamp(0.0, 1.0);
        self
    }

    /// 定时器周期
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// 停留的 tick 数
    pub fn visible_max(&self) -> u32 {
        (self.hold_duration_ms / self.tick_interval_ms.max(1)) as u32
    }
}
