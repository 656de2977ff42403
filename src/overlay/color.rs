//! 颜色模块
//! 提示层使用的浮点颜色（通道范围 0.0-1.0）

/// RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 从 8 位通道创建
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// 转换为 8 位通道（四舍五入并限制范围）
    pub fn to_u8(self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// 按比例变暗：每个通道乘以 (1 - amount)，不低于 0
    pub fn darken(self, amount: f64) -> Self {
        let factor = 1.0 - amount;
        Self {
            r: (self.r * factor).max(0.0),
            g: (self.g * factor).max(0.0),
            b: (self.b * factor).max(0.0),
        }
    }

    /// 附加透明度
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            color: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// 将 `top` 以 `alpha` 混合到当前颜色之上
    pub fn blend(self, top: Rgb, alpha: f64) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |bottom: f64, top: f64| bottom + (top - bottom) * a;
        Self {
            r: mix(self.r, top.r),
            g: mix(self.g, top.g),
            b: mix(self.b, top.b),
        }
    }
}

/// 带透明度的颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// 是否完全透明
    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(c: Rgb) -> [f64; 3] {
        [c.r, c.g, c.b]
    }

    #[test]
    fn test_darken_scales_channels() {
        let c = Rgb::new(1.0, 0.5, 0.0).darken(0.1);
        assert!((c.r - 0.9).abs() < 1e-12);
        assert!((c.g - 0.45).abs() < 1e-12);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_darken_twice_never_brighter() {
        let samples = [
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(1.0, 1.0, 1.0),
            Rgb::new(0.12, 0.12, 0.18),
            Rgb::new(0.8, 0.3, 0.55),
        ];
        for amount in [0.0, 0.1, 0.5, 1.0, 1.5] {
            for sample in samples {
                let once = sample.darken(amount);
                let twice = once.darken(amount);
                for (a, b) in channels(once).iter().zip(channels(twice)) {
                    assert!(b <= *a, "amount {amount}: {b} > {a}");
                    assert!(b >= 0.0);
                }
                // 纯函数：相同输入得到相同输出
                assert_eq!(sample.darken(amount), once);
            }
        }
    }

    #[test]
    fn test_darken_clamps_at_zero() {
        let c = Rgb::new(0.5, 0.5, 0.5).darken(2.0);
        assert_eq!(c, Rgb::BLACK);
    }

    #[test]
    fn test_blend_endpoints() {
        let bottom = Rgb::new(0.0, 0.0, 0.0);
        let top = Rgb::new(1.0, 0.5, 0.25);
        assert_eq!(bottom.blend(top, 0.0), bottom);
        assert_eq!(bottom.blend(top, 1.0), top);
        let half = bottom.blend(top, 0.5);
        assert!((half.r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_u8_conversion() {
        let c = Rgb::from_u8(30, 30, 46);
        assert_eq!(c.to_u8(), (30, 30, 46));
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_u8(), (255, 0, 128));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgb::BLACK.with_alpha(1.4).alpha, 1.0);
        assert!(Rgb::BLACK.with_alpha(-0.2).is_transparent());
    }
}
