//! Menu hooks
//!
//! Independent modules populate the bar by registering contributors. They
//! run once, ordered by priority, right before rendering.

use super::admin_bar::AdminBar;

/// Something that adds, merges or removes nodes on the bar.
pub trait MenuContributor {
    fn contribute(&self, bar: &mut AdminBar);
}

impl<F> MenuContributor for F
where
    F: Fn(&mut AdminBar),
{
    fn contribute(&self, bar: &mut AdminBar) {
        self(bar)
    }
}

struct Hook {
    priority: i32,
    contributor: Box<dyn MenuContributor>,
}

/// Priority-ordered contributor list. Lower priorities run first; equal
/// priorities run in registration order.
#[derive(Default)]
pub struct MenuHooks {
    hooks: Vec<Hook>,
}

impl MenuHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, priority: i32, contributor: impl MenuContributor + 'static) {
        self.hooks.push(Hook {
            priority,
            contributor: Box::new(contributor),
        });
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every contributor against `bar`, consuming the list.
    pub fn run(self, bar: &mut AdminBar) {
        let mut hooks = self.hooks;
        hooks.sort_by_key(|hook| hook.priority);
        for hook in hooks {
            tracing::trace!(priority = hook.priority, "running menu contributor");
            hook.contributor.contribute(bar);
        }
    }
}

impl std::fmt::Debug for MenuHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuHooks")
            .field("len", &self.hooks.len())
            .finish()
    }
}
