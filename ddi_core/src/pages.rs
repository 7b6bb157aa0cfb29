//! Registered routes and navbar highlighting.

/// The four routes the app renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Analyzer,
    AboutProject,
    AboutGroup,
}

impl Page {
    /// Navbar order.
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Analyzer,
        Page::AboutProject,
        Page::AboutGroup,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Analyzer => "/analyzer",
            Page::AboutProject => "/about-project",
            Page::AboutGroup => "/about-group",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analyzer => "Analyzer",
            Page::AboutProject => "About the Project",
            Page::AboutGroup => "About the Group",
        }
    }

    /// Nav-link rule: `/` only matches itself, every other link also
    /// matches its sub-paths.
    pub fn is_active(&self, current: &str) -> bool {
        let current = normalize(current);
        match self {
            Page::Home => current == "/",
            _ => current
                .strip_prefix(self.path())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

/// The highlighted navbar entry, if any.
pub fn active_page(current: &str) -> Option<Page> {
    Page::ALL.into_iter().find(|page| page.is_active(current))
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_only_active_on_root() {
        assert!(Page::Home.is_active("/"));
        assert!(!Page::Home.is_active("/analyzer"));
        assert_eq!(active_page("/analyzer"), Some(Page::Analyzer));
    }

    #[test]
    fn sub_paths_keep_parent_active() {
        assert!(Page::Analyzer.is_active("/analyzer/"));
        assert!(Page::Analyzer.is_active("/analyzer/history"));
        assert!(!Page::Analyzer.is_active("/analyzers"));
        assert!(!Page::AboutProject.is_active("/about-group"));
    }

    #[test]
    fn at_most_one_link_is_active() {
        let paths = [
            "/",
            "/analyzer",
            "/about-project",
            "/about-group",
            "/about-project/team",
            "/missing",
            "",
        ];
        for path in paths {
            let active = Page::ALL.iter().filter(|p| p.is_active(path)).count();
            assert!(active <= 1, "{path} highlights {active} links");
        }
        assert_eq!(active_page("/missing"), None);
    }

    #[test]
    fn every_registered_route_highlights_itself() {
        for page in Page::ALL {
            assert_eq!(active_page(page.path()), Some(page));
            assert_eq!(active_page(&format!("{}/", page.path())), Some(page));
        }
        assert_eq!(active_page(""), Some(Page::Home));
        assert_eq!(active_page("/about-project/team"), Some(Page::AboutProject));
    }
}
