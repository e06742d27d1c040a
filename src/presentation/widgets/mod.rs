mod confirm_popup;
mod footer_bar;
mod input_bar;
mod line_edit;
mod notice_popup;
mod task_list_pane;
mod task_row;

pub use confirm_popup::ConfirmPopup;
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use input_bar::{InputBar, InputBarAction, InputBarState};
pub use line_edit::LineEdit;
pub use notice_popup::NoticePopup;
pub use task_list_pane::{TaskListPane, TaskListPaneState};
pub use task_row::{RowMode, TaskRow, TaskRowState};
