//! 绘制管线
//! 视图的绘制按固定顺序进行：先绘制宿主内容，再依次调用已注册的钩子

/// 绘制钩子标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintHookId(pub u64);

/// 视图的有序绘制参与者列表
#[derive(Debug, Default)]
pub struct PaintPipeline {
    hooks: Vec<PaintHookId>,
    next_id: u64,
}

impl PaintPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个钩子（排在已有钩子之后）
    pub fn subscribe(&mut self) -> PaintHookId {
        self.next_id += 1;
        let id = PaintHookId(self.next_id);
        self.hooks.push(id);
        id
    }

    /// 移除钩子，返回是否存在
    pub fn unsubscribe(&mut self, id: PaintHookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|h| *h != id);
        self.hooks.len() != before
    }

    pub fn is_subscribed(&self, id: PaintHookId) -> bool {
        self.hooks.contains(&id)
    }

    /// 按注册顺序返回钩子
    pub fn hooks(&self) -> &[PaintHookId] {
        &self.hooks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_order() {
        let mut pipeline = PaintPipeline::new();
        let a = pipeline.subscribe();
        let b = pipeline.subscribe();
        assert_eq!(pipeline.hooks(), &[a, b]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut pipeline = PaintPipeline::new();
        let a = pipeline.subscribe();
        let b = pipeline.subscribe();

        assert!(pipeline.unsubscribe(a));
        assert!(!pipeline.unsubscribe(a));
        assert!(!pipeline.is_subscribed(a));
        assert_eq!(pipeline.hooks(), &[b]);

        // 标识不复用
        let c = pipeline.subscribe();
        assert_ne!(c, a);
    }
}
