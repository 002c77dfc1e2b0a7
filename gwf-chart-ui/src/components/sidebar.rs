//! Left-hand navigation panel.

use super::{Notice, WellSelector};
use dioxus::prelude::*;

const DEVELOPER: &str = "Kedir Bushira, PhD";
const DEVELOPER_ROLE: &str = "Water Resources Engineer & Data Scientist";
const DEVELOPER_EMAIL: &str = "kdrmohammed@gmail.com";

/// Profile badges: (alt text, badge image, link).
const PROFILE_BADGES: [(&str, &str, &str); 2] = [
    (
        "LinkedIn",
        "https://img.shields.io/badge/LinkedIn-Profile-blue?style=flat&logo=linkedin",
        "https://www.linkedin.com/in/kedir-bushira/",
    ),
    (
        "GitHub",
        "https://img.shields.io/badge/GitHub-Repo-lightgrey?style=flat&logo=github",
        "https://github.com/Bushira1/chesapeake-Bay-groundwater-ML-Model/tree/main",
    ),
];

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            style: "width: 260px; flex-shrink: 0; padding: 16px; background: #F5F7FA; border-right: 1px solid #E0E0E0;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "Well Locations"
            }
            Notice {
                message: "To see exact site locations, hover over the drops on the map. You can click a marker to navigate directly to that well's analysis."
                    .to_string(),
            }
            WellSelector {}
            hr {}
            ContactInfo {}
        }
    }
}

/// Developer contact block under the station selector.
#[component]
fn ContactInfo() -> Element {
    let mailto = format!("mailto:{DEVELOPER_EMAIL}");

    rsx! {
        h3 {
            style: "margin: 8px 0; font-size: 16px;",
            "Contact & Developer Info"
        }
        p {
            style: "margin: 0 0 8px 0; font-size: 13px;",
            strong { "{DEVELOPER}" }
            br {}
            "({DEVELOPER_ROLE})"
        }
        p {
            style: "margin: 0 0 8px 0; font-size: 13px;",
            "Email: "
            a { href: "{mailto}", "{DEVELOPER_EMAIL}" }
        }
        div {
            style: "display: flex; gap: 6px; flex-wrap: wrap;",
            for (alt, badge, link) in PROFILE_BADGES {
                a {
                    key: "{alt}",
                    href: link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    img { src: badge, alt: alt }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_badges_link_out() {
        for (alt, badge, link) in PROFILE_BADGES {
            assert!(badge.starts_with("https://img.shields.io/badge/"), "{alt}");
            assert!(link.starts_with("https://"), "{alt}");
        }
        assert!(DEVELOPER_EMAIL.contains('@'));
    }
}
