//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger, the
//! per-section color theme, and the authenticated session.

use leptos::prelude::*;

use crate::firebase::auth::{clear_session, save_session, Session};

/// The color families used across the app. Sections keep their color as a
/// free-form string and resolve it through `ThemeColor::parse`, falling back
/// per section when the stored value is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Blue,
    Green,
    Yellow,
    Black,
    White,
}

impl ThemeColor {
    pub fn parse(s: &str) -> Option<ThemeColor> {
        match s {
            "blue" => Some(ThemeColor::Blue),
            "green" => Some(ThemeColor::Green),
            "yellow" => Some(ThemeColor::Yellow),
            "black" => Some(ThemeColor::Black),
            "white" => Some(ThemeColor::White),
            _ => None,
        }
    }

    /// Primary action buttons.
    pub fn button_classes(&self) -> &'static str {
        match self {
            ThemeColor::Green => "bg-green-600 hover:bg-green-700 focus:ring-green-500",
            ThemeColor::Yellow => "bg-yellow-600 hover:bg-yellow-700 focus:ring-yellow-500",
            _ => "bg-blue-600 hover:bg-blue-700 focus:ring-blue-500",
        }
    }

    /// Active navbar entries.
    pub fn menu_classes(&self) -> &'static str {
        match self {
            ThemeColor::Green => "text-white bg-green-600 px-3 py-2 rounded-md",
            ThemeColor::Yellow => "text-white bg-yellow-600 px-3 py-2 rounded-md",
            _ => "text-white bg-blue-600 px-3 py-2 rounded-md",
        }
    }

    /// Focus rings on text inputs.
    pub fn focus_ring_classes(&self) -> &'static str {
        match self {
            ThemeColor::Green => "focus:ring-green-500 outline-none",
            ThemeColor::Yellow => "focus:ring-yellow-500 outline-none",
            _ => "focus:ring-blue-500 outline-none",
        }
    }

    pub fn page_background(&self) -> &'static str {
        match self {
            ThemeColor::Blue => "bg-blue-100",
            ThemeColor::Green => "bg-green-100",
            ThemeColor::Yellow => "bg-yellow-100",
            ThemeColor::Black => "bg-neutral-700",
            ThemeColor::White => "bg-white",
        }
    }
}

/// Per-section color configuration, raw strings as configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dashboard: String,
    pub inventory: String,
    pub memories: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            dashboard: "blue".to_string(),
            inventory: "yellow".to_string(),
            memories: "green".to_string(),
        }
    }
}

impl Theme {
    pub fn dashboard_color(&self) -> ThemeColor {
        ThemeColor::parse(&self.dashboard).unwrap_or(ThemeColor::Blue)
    }

    pub fn inventory_color(&self) -> ThemeColor {
        ThemeColor::parse(&self.inventory).unwrap_or(ThemeColor::Yellow)
    }

    pub fn memories_color(&self) -> ThemeColor {
        ThemeColor::parse(&self.memories).unwrap_or(ThemeColor::Green)
    }
}

/// Page background tint by route.
pub fn page_background_for_path(path: &str) -> &'static str {
    let color = match path {
        "/" => ThemeColor::Blue,
        "/inventory" => ThemeColor::Yellow,
        "/memories" => ThemeColor::Green,
        "/login" | "/register" => ThemeColor::Black,
        _ => ThemeColor::White,
    };
    color.page_background()
}

// ========================
// Auth state
// ========================

/// Session observation states. `Unknown` covers the window between startup
/// and the restored session's validation.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Unknown,
    SignedOut,
    SignedIn(Session),
}

/// Auth observation handle provided via context; the navbar and route guards
/// react to the signal, write paths go through the setters so localStorage
/// stays in sync.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::Unknown),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn session(&self) -> Option<Session> {
        match self.state.get_untracked() {
            AuthState::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn set_signed_in(&self, session: Session) {
        save_session(&session);
        self.state.set(AuthState::SignedIn(session));
    }

    pub fn set_signed_out(&self) {
        clear_session();
        self.state.set(AuthState::SignedOut);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

// ========================
// App context
// ========================

/// App-wide signals provided via context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after each write so open views refresh their snapshot early.
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Per-section color configuration.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            theme: RwSignal::new(Theme::default()),
        }
    }

    /// Ask open views to re-subscribe and fetch a fresh snapshot.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_strings_fall_back_per_section() {
        let theme = Theme {
            dashboard: "blue".into(),
            inventory: "asd".into(),
            memories: "".into(),
        };
        assert_eq!(theme.dashboard_color(), ThemeColor::Blue);
        assert_eq!(theme.inventory_color(), ThemeColor::Yellow);
        assert_eq!(theme.memories_color(), ThemeColor::Green);
    }

    #[test]
    fn page_background_follows_route() {
        assert_eq!(page_background_for_path("/"), "bg-blue-100");
        assert_eq!(page_background_for_path("/inventory"), "bg-yellow-100");
        assert_eq!(page_background_for_path("/memories"), "bg-green-100");
        assert_eq!(page_background_for_path("/login"), "bg-neutral-700");
        assert_eq!(page_background_for_path("/register"), "bg-neutral-700");
        assert_eq!(page_background_for_path("/nope"), "bg-white");
    }
}
