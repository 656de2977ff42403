//! 几何路径模块
//! 提供浮点矩形、路径与圆角矩形构建

use std::f64::consts::{FRAC_PI_2, PI};

/// 圆弧展开为折线时每段的细分数
const ARC_STEPS: usize = 8;

/// 浮点坐标点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 浮点矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 向四周扩展 (dx, dy)
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            width: self.width + 2.0 * dx,
            height: self.height + 2.0 * dy,
        }
    }

    /// 上半部分
    pub fn top_half(&self) -> Self {
        Self::new(self.x, self.y, self.width, 0.5 * self.height)
    }

    /// 下半部分
    pub fn bottom_half(&self) -> Self {
        Self::new(
            self.x,
            self.y + 0.5 * self.height,
            self.width,
            0.5 * self.height,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// 半开区间判断：[x, right) × [y, bottom)
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// 路径片段
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(PointF),
    LineTo(PointF),
    /// 顺时针圆弧（屏幕坐标系，y 轴向下），角度为弧度
    Arc {
        center: PointF,
        radius: f64,
        start: f64,
        end: f64,
    },
    Close,
}

/// 闭合或开放的路径
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn move_to(&mut self, p: PointF) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: PointF) {
        self.segments.push(PathSegment::LineTo(p));
    }

    /// 添加圆弧；若当前点不在圆弧起点，先补一条直线
    pub fn arc(&mut self, center: PointF, radius: f64, start: f64, end: f64) {
        let from = arc_point(center, radius, start);
        if let Some(current) = self.current_point() {
            if !same_point(current, from) {
                self.line_to(from);
            }
        }
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// 当前画笔位置
    fn current_point(&self) -> Option<PointF> {
        self.segments.iter().rev().find_map(|seg| match *seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::Arc {
                center,
                radius,
                end,
                ..
            } => Some(arc_point(center, radius, end)),
            PathSegment::Close => None,
        })
    }

    /// 将路径展开为折线（圆弧按固定步数细分）
    pub fn flatten(&self) -> Vec<PointF> {
        let mut points = Vec::new();
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(p),
                PathSegment::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => {
                    for i in 0..=ARC_STEPS {
                        let t = start + (end - start) * i as f64 / ARC_STEPS as f64;
                        points.push(arc_point(center, radius, t));
                    }
                }
                PathSegment::Close => {}
            }
        }
        points
    }

    /// 路径包围盒
    pub fn bounds(&self) -> Option<RectF> {
        let points = self.flatten();
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(RectF::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// 点是否在路径内部（奇偶规则，按闭合路径处理）
    pub fn contains(&self, p: PointF) -> bool {
        let poly = self.flatten();
        if poly.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = poly.len() - 1;
        for i in 0..poly.len() {
            let (a, b) = (poly[i], poly[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn arc_point(center: PointF, radius: f64, angle: f64) -> PointF {
    PointF::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn same_point(a: PointF, b: PointF) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

/// 构建圆角矩形路径
///
/// 依次为右上、右下、左下、左上四段四分之一圆弧，相邻圆弧之间以直线相连，
/// 最后闭合，可同时用于描边与裁剪。
pub fn rounded_rectangle(rect: RectF, radius: f64) -> Path {
    let RectF {
        x,
        y,
        width,
        height,
    } = rect;
    let r = radius.max(0.0);

    let mut path = Path::new();
    path.move_to(PointF::new(x + r, y));
    path.arc(PointF::new(x + width - r, y + r), r, PI * 1.5, PI * 2.0);
    path.arc(PointF::new(x + width - r, y + height - r), r, 0.0, FRAC_PI_2);
    path.arc(PointF::new(x + r, y + height - r), r, FRAC_PI_2, PI);
    path.arc(PointF::new(x + r, y + r), r, PI, PI * 1.5);
    path.close();
    path
}
