//! fadenote - 带淡入淡出提示层的终端文本编辑器
//!
//! 每个标签页挂载一个提示层：保存、切换模式时在编辑区中央
//! 淡入显示一条消息，停留约两秒后淡出

mod app;
mod config;
mod event;
mod host;
mod overlay;
mod ui;

use app::{AppState, Document};
use config::{get_config_path, load_config, open_log_file, save_config, AppConfig};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use ui::draw_ui;

/// 没有活动定时器时的最长等待时间
const IDLE_WAIT: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // TUI 应用中禁用控制台日志（会干扰界面），设置 RUST_LOG 时写入文件
    init_logging();

    // 加载配置
    let config_path = get_config_path();
    let config = load_config(&config_path).unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();
    run_app(config, args).await
}

/// 初始化文件日志，仅在设置了 RUST_LOG 时启用
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = open_log_file() else {
        return;
    };
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// 运行主应用
async fn run_app(config: AppConfig, args: Vec<String>) -> anyhow::Result<()> {
    // 初始化应用状态
    let mut state = AppState::new(config.clone());

    // 命令行参数优先，其次是上次打开的文档
    let paths = if args.is_empty() {
        config.documents.clone()
    } else {
        args
    };
    for path in &paths {
        match Document::load(&PathBuf::from(path)) {
            Ok(doc) => {
                state.open_tab(doc);
            }
            Err(e) => log::warn!("Failed to load document {}: {}", path, e),
        }
    }
    if state.tabs.is_empty() {
        state.open_tab(Document::new());
    }

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 创建事件流
    let mut event_stream = EventStream::new();

    // 主循环
    let result = loop {
        // 只在状态变化或提示层请求重绘时渲染
        if state.take_redraw() {
            if let Err(e) = terminal.draw(|frame| draw_ui(frame, &mut state)) {
                break Err(e.into());
            }
        }

        // 检查是否应该退出
        if state.should_quit {
            break Ok(());
        }

        // 等待事件或下一个定时器到期
        let deadline = state
            .timers
            .next_deadline()
            .map(Instant::from_std)
            .unwrap_or_else(|| Instant::now() + IDLE_WAIT);

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(evt)) => match event::handle_event(&mut state, evt) {
                        Ok(true) => state.mark_dirty(),
                        Ok(false) => {}
                        Err(e) => break Err(e),
                    },
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }
            _ = tokio::time::sleep_until(deadline) => {
                state.dispatch_timers(std::time::Instant::now());
            }
        }
    };

    // 卸载提示层并保存配置
    state.shutdown();
    let mut new_config = state.config.clone();
    new_config.documents = state.document_paths();
    if let Err(e) = save_config(&new_config, &get_config_path()) {
        log::warn!("Failed to save config: {}", e);
    }

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
