//! Info and error boxes.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    #[props(default)]
    pub kind: NoticeKind,
}

/// Displays a message in a styled box.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let style = match props.kind {
        NoticeKind::Info => "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #0D47A1; border-radius: 4px; border: 1px solid #90CAF9;",
        NoticeKind::Error => "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
    };

    rsx! {
        div {
            style: "{style}",
            if props.kind == NoticeKind::Error {
                strong { "Error: " }
            }
            "{props.message}"
        }
    }
}
