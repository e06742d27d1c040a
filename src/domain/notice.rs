use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
}

/// A blocking informational dialog.
///
/// Notices capture input until the user acknowledges them; they carry
/// no choices. Anything requiring a decision is a confirmation modal,
/// not a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: Cow<'static, str>,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(
        level: NoticeLevel,
        title: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// The warning shown when an add is rejected for a duplicate title.
    #[must_use]
    pub fn duplicate_title(title: &str) -> Self {
        Self::new(
            NoticeLevel::Warn,
            "Task already exists",
            format!("A task titled \"{title}\" is already on the list."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_creation() {
        let notice = Notice::new(NoticeLevel::Info, "Title", "Message");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.title, "Title");
        assert_eq!(notice.message, "Message");
    }

    #[test]
    fn test_duplicate_title_notice_names_the_task() {
        let notice = Notice::duplicate_title("Buy milk");
        assert_eq!(notice.level, NoticeLevel::Warn);
        assert!(notice.message.contains("Buy milk"));
    }
}
