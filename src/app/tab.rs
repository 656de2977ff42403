//! 编辑器标签页
//! 每个标签页组合持有自己的文档、视图表面与提示层控制器

use super::Document;
use crate::host::{PaintPipeline, TimerQueue, ViewId, WidgetState};
use crate::overlay::{OverlayConfig, OverlayMessage};
use crate::ui::Theme;

use super::ViewHost;

/// 视图表面：重绘标记、绘制管线与最近一次绘制的尺寸
#[derive(Debug, Default)]
pub struct ViewSurface {
    pub paint: PaintPipeline,
    pub needs_redraw: bool,
    pub state: WidgetState,
    /// 文本区尺寸（列, 行），每次绘制时更新
    pub geometry: (u16, u16),
}

impl ViewSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 编辑器标签页
#[derive(Debug)]
pub struct EditorTab {
    pub id: ViewId,
    pub document: Document,
    pub surface: ViewSurface,
    pub overlay: OverlayMessage,
}

impl EditorTab {
    /// 打开标签页并挂载提示层
    pub fn open(
        id: ViewId,
        document: Document,
        timers: &mut TimerQueue,
        theme: &Theme,
        config: &OverlayConfig,
    ) -> Self {
        let mut surface = ViewSurface::new();
        let overlay = {
            let mut host = ViewHost::new(id, &mut surface, timers, theme);
            OverlayMessage::attach(&mut host, config.clone())
        };
        log::debug!("tab {:?} opened: {}", id, document.title());
        Self {
            id,
            document,
            surface,
            overlay,
        }
    }

    /// 借出该视图的宿主接口与提示层
    pub fn split<'a>(
        &'a mut self,
        timers: &'a mut TimerQueue,
        theme: &'a Theme,
    ) -> (&'a mut OverlayMessage, ViewHost<'a>) {
        let host = ViewHost::new(self.id, &mut self.surface, timers, theme);
        (&mut self.overlay, host)
    }

    /// 关闭标签页：卸载提示层，释放定时器与绘制钩子
    pub fn close(&mut self, timers: &mut TimerQueue, theme: &Theme) {
        let (overlay, mut host) = self.split(timers, theme);
        overlay.stop(&mut host);
        log::debug!("tab {:?} closed", self.id);
    }
}
