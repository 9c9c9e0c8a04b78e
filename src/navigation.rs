//! Route stack. The app has exactly one route, `Home`. It has no
//! navigation header, so the brand header is the only title bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }
}
