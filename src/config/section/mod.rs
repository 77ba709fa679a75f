//! Configuration section definitions.
//!
//! | Module  | Key           | Purpose                                   |
//! |---------|---------------|-------------------------------------------|
//! | `head`  | `head`        | Extra `<head>` tags, emitted verbatim     |
//! | `theme` | `themeConfig` | Logo, nav, sidebars, social, footer, search |

mod head;
pub mod theme;

pub use head::{Attributes, HeadTag};
pub use theme::{
    ALGOLIA_REQUIRED, Footer, NavItem, SearchConfig, SearchProvider, SidebarGroup, SidebarItem,
    SidebarMap, SocialLink, SocialProvider, ThemeConfig,
};
