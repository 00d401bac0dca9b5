//! Seam to the wizard's navigation primitive.

use crate::context::OutboundContext;

/// Navigation request issued by the step.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Back to the start of the wizard, without payload
    Home { path: String },
    /// On to the next step, carrying the outbound context
    NextStep {
        path: String,
        state: OutboundContext,
    },
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Self::Home { path } | Self::NextStep { path, .. } => path,
        }
    }
}

/// Receives navigation requests. The call is a hand-off: the step keeps
/// nothing of the route afterwards.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Collects routes in order; handy for tests and for hosts that drain
/// navigation requests after each event.
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, route: Route) {
        (**self).navigate(route);
    }
}
