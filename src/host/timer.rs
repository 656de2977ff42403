//! 宿主定时器队列
//! 由主事件循环驱动：循环等待最近的截止时间，然后分发到期的定时器

use super::ViewId;
use std::time::{Duration, Instant};

/// 定时器句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// 周期定时器
#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    view: ViewId,
    interval: Duration,
    next_due: Instant,
}

/// 周期定时器队列
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_handle: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册周期定时器，首次触发在 `now + interval`
    pub fn schedule(&mut self, view: ViewId, interval: Duration, now: Instant) -> TimerHandle {
        // 零周期会导致忙循环
        let interval = interval.max(Duration::from_millis(1));
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.timers.push(Timer {
            handle,
            view,
            interval,
            next_due: now + interval,
        });
        log::debug!("timer {:?} scheduled for {:?} every {:?}", handle, view, interval);
        handle
    }

    /// 取消定时器，返回是否存在
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        let removed = self.timers.len() != before;
        if removed {
            log::debug!("timer {:?} cancelled", handle);
        }
        removed
    }

    /// 取消某个视图的全部定时器
    pub fn cancel_view(&mut self, view: ViewId) {
        self.timers.retain(|t| t.view != view);
    }

    /// 定时器是否仍在队列中
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// 最近的截止时间
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.next_due).min()
    }

    /// 取出所有到期的定时器，并按整周期推进下次触发时间
    ///
    /// 每个定时器每次调用最多触发一次，错过的周期直接跳过。
    pub fn fire_due(&mut self, now: Instant) -> Vec<(TimerHandle, ViewId)> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            if timer.next_due > now {
                continue;
            }
            fired.push((timer.handle, timer.view));
            while timer.next_due <= now {
                timer.next_due += timer.interval;
            }
        }
        fired
    }
}
