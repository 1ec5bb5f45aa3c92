//! ==============================================================================
//! menu.rs - collapsible sidebar navigation
//! ==============================================================================
//!
//! the menu is a static tree of tagged nodes: a Leaf links to a route, a
//! Branch groups children and expands/collapses on click. one recursive
//! renderer handles arbitrary nesting. the whole sidebar additionally
//! collapses to icon-only width.
//! ==============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

// ==============================================================================
// menu tree
// ==============================================================================

/// one node of the navigation tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNode {
    Leaf {
        path: &'static str,
        label: &'static str,
        icon: &'static str,
    },
    Branch {
        label: &'static str,
        icon: &'static str,
        children: &'static [MenuNode],
    },
}

pub const MENU: &[MenuNode] = &[
    MenuNode::Leaf {
        path: "/",
        label: "Home",
        icon: "🏠",
    },
    MenuNode::Leaf {
        path: "/dashboard",
        label: "Dashboard",
        icon: "📊",
    },
    MenuNode::Branch {
        label: "Settings",
        icon: "⚙️",
        children: &[
            MenuNode::Leaf {
                path: "/settings",
                label: "General",
                icon: "🔧",
            },
            MenuNode::Leaf {
                path: "/settings/security",
                label: "Security",
                icon: "🔒",
            },
            MenuNode::Leaf {
                path: "/settings/account",
                label: "Account",
                icon: "👤",
            },
        ],
    },
    MenuNode::Branch {
        label: "Profile",
        icon: "👤",
        children: &[
            MenuNode::Leaf {
                path: "/profile",
                label: "Profile Info",
                icon: "📋",
            },
            MenuNode::Leaf {
                path: "/profile/edit",
                label: "Edit Profile",
                icon: "✏️",
            },
            MenuNode::Leaf {
                path: "/profile/preferences",
                label: "Preferences",
                icon: "⚙️",
            },
        ],
    },
    MenuNode::Branch {
        label: "API Examples",
        icon: "🔌",
        children: &[
            MenuNode::Leaf {
                path: "/api/get",
                label: "GET Example",
                icon: "📥",
            },
            MenuNode::Leaf {
                path: "/api/post",
                label: "POST Example",
                icon: "📤",
            },
            MenuNode::Leaf {
                path: "/api/put",
                label: "PUT Example",
                icon: "🔄",
            },
            MenuNode::Leaf {
                path: "/api/delete",
                label: "DELETE Example",
                icon: "🗑️",
            },
        ],
    },
    MenuNode::Leaf {
        path: "/table",
        label: "Table Example",
        icon: "📋",
    },
    MenuNode::Leaf {
        path: "/advanced-table",
        label: "Advanced Table",
        icon: "📈",
    },
];

// ==============================================================================
// sidebar component
// ==============================================================================

#[component]
pub fn MenuBar(collapsed: ReadSignal<bool>, set_collapsed: WriteSignal<bool>) -> impl IntoView {
    // labels of currently expanded branches
    let expanded: RwSignal<Vec<&'static str>> = RwSignal::new(Vec::new());

    view! {
        <aside class=move || if collapsed.get() { "menu-bar collapsed" } else { "menu-bar" }>
            <div class="menu-header">
                <Show when=move || !collapsed.get()>
                    <h2 class="menu-title">"Navigation"</h2>
                </Show>
                <button
                    class="menu-toggle"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "☰" } else { "✕" }}
                </button>
            </div>
            <nav class="menu-nav">
                <ul class="menu-list">
                    {MENU
                        .iter()
                        .map(|node| render_node(node, collapsed, expanded, 0))
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

/// recursive renderer for one menu node
fn render_node(
    node: &'static MenuNode,
    collapsed: ReadSignal<bool>,
    expanded: RwSignal<Vec<&'static str>>,
    depth: usize,
) -> AnyView {
    match node {
        MenuNode::Leaf { path, label, icon } => {
            let location = use_location();
            let class = move || {
                let mut class = String::from("menu-item");
                if depth > 0 {
                    class.push_str(" submenu-item");
                }
                if location.pathname.get() == *path {
                    class.push_str(" active");
                }
                class
            };

            view! {
                <li>
                    // the router intercepts same-origin anchors, so a plain
                    // <a> navigates client-side
                    <a
                        href=*path
                        class=class
                        title=move || if collapsed.get() { *label } else { "" }
                    >
                        <span class="menu-icon">{*icon}</span>
                        <Show when=move || !collapsed.get()>
                            <span class="menu-label">{*label}</span>
                        </Show>
                    </a>
                </li>
            }
            .into_any()
        }
        MenuNode::Branch {
            label,
            icon,
            children,
        } => {
            let is_expanded = move || expanded.with(|e| e.iter().any(|l| l == label));
            let toggle = move |_| {
                expanded.update(|e| {
                    if let Some(pos) = e.iter().position(|l| l == label) {
                        e.remove(pos);
                    } else {
                        e.push(*label);
                    }
                })
            };

            view! {
                <li class="menu-parent-item">
                    <div
                        class=move || {
                            if is_expanded() { "menu-item expanded" } else { "menu-item" }
                        }
                        on:click=toggle
                    >
                        <span class="menu-icon">{*icon}</span>
                        <Show when=move || !collapsed.get()>
                            <span class="menu-label">{*label}</span>
                            <span class="menu-arrow">
                                {move || if is_expanded() { "▲" } else { "▼" }}
                            </span>
                        </Show>
                    </div>
                    <Show when=move || !collapsed.get() && is_expanded()>
                        <ul class="submenu-list">
                            {children
                                .iter()
                                .map(|child| render_node(child, collapsed, expanded, depth + 1))
                                .collect_view()}
                        </ul>
                    </Show>
                </li>
            }
            .into_any()
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_paths(nodes: &[MenuNode], out: &mut Vec<&'static str>) {
        for node in nodes {
            match node {
                MenuNode::Leaf { path, .. } => out.push(*path),
                MenuNode::Branch { children, .. } => leaf_paths(children, out),
            }
        }
    }

    #[test]
    fn test_menu_covers_all_routes() {
        let mut paths = Vec::new();
        leaf_paths(MENU, &mut paths);
        assert_eq!(paths.len(), 14);
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/advanced-table"));
        assert!(paths.contains(&"/api/delete"));
    }

    #[test]
    fn test_menu_paths_are_unique_and_absolute() {
        let mut paths = Vec::new();
        leaf_paths(MENU, &mut paths);
        let mut deduped = paths.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), paths.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }

    #[test]
    fn test_branches_have_children() {
        for node in MENU {
            if let MenuNode::Branch { children, .. } = node {
                assert!(!children.is_empty());
            }
        }
    }
}
