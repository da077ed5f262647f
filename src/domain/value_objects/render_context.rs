//! Render context value object
//!
//! Everything the renderer needs to know about the request it renders for.
//! Callers build it explicitly instead of the renderer reading ambient state.

use serde::{Deserialize, Serialize};

/// Browser family, as far as the bar's stylesheet cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Other,
    /// Internet Explorer without a version-specific class
    Ie,
    Ie7,
    Ie8,
    Ie9,
    /// Mobile Safari
    Mobile,
}

impl Browser {
    /// Classify a `User-Agent` header value.
    pub fn detect(user_agent: &str) -> Self {
        let is_edge = user_agent.contains("Edge") || user_agent.contains("Edg/");
        if is_edge || user_agent.contains("Chrome") {
            return Browser::Other;
        }

        if user_agent.contains("MSIE") || user_agent.contains("Trident") {
            return if user_agent.contains("MSIE 7") {
                Browser::Ie7
            } else if user_agent.contains("MSIE 8") {
                Browser::Ie8
            } else if user_agent.contains("MSIE 9") {
                Browser::Ie9
            } else {
                Browser::Ie
            };
        }

        if user_agent.contains("Safari") && user_agent.to_lowercase().contains("mobile") {
            return Browser::Mobile;
        }

        Browser::Other
    }

    /// Extra class appended to the bar container, if any.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Browser::Ie7 => Some("ie7"),
            Browser::Ie8 => Some("ie8"),
            Browser::Ie9 => Some("ie9"),
            Browser::Mobile => Some("mobile"),
            Browser::Ie | Browser::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub browser: Browser,
    /// Whether the page is served over TLS
    pub secure: bool,
}

impl RenderContext {
    pub fn new(browser: Browser, secure: bool) -> Self {
        Self { browser, secure }
    }

    pub fn from_user_agent(user_agent: Option<&str>, secure: bool) -> Self {
        let browser = user_agent.map(Browser::detect).unwrap_or_default();
        Self { browser, secure }
    }

    /// Scheme prefix for absolute links built by menu contributors.
    pub fn proto(&self) -> &'static str {
        if self.secure {
            "https://"
        } else {
            "http://"
        }
    }

    /// Class list of the outer bar container.
    ///
    /// `nojq nojs` are removed client-side once scripts load.
    pub fn bar_class(&self) -> String {
        match self.browser.class() {
            Some(extra) => format!("nojq nojs {}", extra),
            None => "nojq nojs".to_string(),
        }
    }
}
