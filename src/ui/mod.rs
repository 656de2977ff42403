//! UI 模块
//! 包含所有 UI 相关组件

mod editor;
mod layout;
mod overlay_canvas;
mod status_bar;
mod theme;
mod title_bar;

pub use editor::*;
pub use layout::*;
pub use overlay_canvas::*;
pub use status_bar::*;
pub use theme::*;
pub use title_bar::*;
