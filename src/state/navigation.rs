// Navigation state management.
// Handles the navigation stack and breadcrumb trail for the screens.

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
    /// The view level this node represents.
    pub level: ViewLevel,
}

/// The current view level in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLevel {
    /// Top level: the pet list.
    Pets,
    /// Detail view for a specific pet.
    PetDetail { id: u64, name: String },
}

impl ViewLevel {
    /// Create a breadcrumb node for this view level.
    pub fn to_breadcrumb(&self) -> BreadcrumbNode {
        let label = match self {
            ViewLevel::Pets => "Pets".to_string(),
            ViewLevel::PetDetail { id, name } => {
                if name.is_empty() {
                    format!("#{}", id)
                } else {
                    name.clone()
                }
            }
        };
        BreadcrumbNode {
            label,
            level: self.clone(),
        }
    }
}

/// Navigation stack for the application.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    /// Stack of view levels (bottom = root, top = current)
    stack: Vec<ViewLevel>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given level.
    pub fn new(root: ViewLevel) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current view level.
    pub fn current(&self) -> &ViewLevel {
        self.stack.last().expect("Stack should never be empty")
    }

    /// Push a new view level onto the stack (drill down).
    pub fn push(&mut self, level: ViewLevel) {
        self.stack.push(level);
    }

    /// Pop the current view level (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at root).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.stack
            .iter()
            .map(|level| level.to_breadcrumb())
            .collect()
    }

    /// Get the depth of the navigation stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(ViewLevel::Pets)
    }
}
