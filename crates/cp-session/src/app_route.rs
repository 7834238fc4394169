use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardSection {
    Overview,
    Chats,
    Clients,
    Deals,
    Tasks,
    Analytics,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 6] = [
        Self::Overview,
        Self::Chats,
        Self::Clients,
        Self::Deals,
        Self::Tasks,
        Self::Analytics,
    ];

    fn segment(&self) -> Option<&'static str> {
        match self {
            Self::Overview => None,
            Self::Chats => Some("chats"),
            Self::Clients => Some("clients"),
            Self::Deals => Some("deals"),
            Self::Tasks => Some("tasks"),
            Self::Analytics => Some("analytics"),
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.segment() == Some(segment))
    }
}

/// Client-side navigation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "path", rename_all = "snake_case")]
pub enum AppRoute {
    Home,
    CookiePolicy,
    Constructor,
    Dashboard(DashboardSection),
    /// Unmatched path, kept for display
    NotFound(String),
}

impl AppRoute {
    /// Map a location to a route. Matching ignores ASCII case, query,
    /// fragment and trailing slashes.
    pub fn parse(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_ascii_lowercase();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["cookie-policy"] => Self::CookiePolicy,
            ["constructor"] => Self::Constructor,
            ["dashboard"] => Self::Dashboard(DashboardSection::Overview),
            ["dashboard", section] => match DashboardSection::from_segment(section) {
                Some(section) => Self::Dashboard(section),
                None => Self::NotFound(location.to_string()),
            },
            _ => Self::NotFound(location.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::CookiePolicy => "/cookie-policy".to_string(),
            Self::Constructor => "/constructor".to_string(),
            Self::Dashboard(section) => match section.segment() {
                Some(segment) => format!("/dashboard/{segment}"),
                None => "/dashboard".to_string(),
            },
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Needs an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Constructor | Self::Dashboard(_))
    }

    /// Translation key of the page title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Home => "features",
            Self::CookiePolicy => "cookiePolicy",
            Self::Constructor => "constructor",
            Self::Dashboard(DashboardSection::Overview) => "dashboard",
            Self::Dashboard(DashboardSection::Chats) => "chats",
            Self::Dashboard(DashboardSection::Clients) => "clients",
            Self::Dashboard(DashboardSection::Deals) => "deals",
            Self::Dashboard(DashboardSection::Tasks) => "tasks",
            Self::Dashboard(DashboardSection::Analytics) => "analytics",
            Self::NotFound(_) => "notFound",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
