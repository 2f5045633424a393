/// Node id scoping
///
/// Short node ids are qualified with the scope declared by the most recent
/// `!scope` command. The resolver keeps that scope for the rest of the run:
/// the `game.scope = 'g'` reset emitted at the end of each node only affects
/// the generated program.

/// Scope used when a story declares none.
pub const GLOBAL_SCOPE: &str = "g";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeResolver {
    scope: String,
}

impl Default for ScopeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeResolver {
    pub fn new() -> Self {
        Self {
            scope: GLOBAL_SCOPE.to_string(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Replace the current scope. An empty scope disables qualification.
    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    /// Qualified form of `id` as used for keys in `game.gameNodes`.
    pub fn resolve(&self, id: &str) -> String {
        if id.contains(':') || self.scope.is_empty() {
            format!("={}=", id)
        } else {
            format!("={}:{}=", self.scope, id)
        }
    }
}
